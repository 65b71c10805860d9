use crate::PlayerSlot;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,  // Left player score
    pub right: u32, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: PlayerSlot) -> u32 {
        match slot {
            PlayerSlot::Left => self.left,
            PlayerSlot::Right => self.right,
        }
    }

    pub fn increment(&mut self, slot: PlayerSlot) {
        match slot {
            PlayerSlot::Left => self.left += 1,
            PlayerSlot::Right => self.right += 1,
        }
    }

    /// First slot, left before right, that reached `win_score`
    pub fn has_winner(&self, win_score: u32) -> Option<PlayerSlot> {
        PlayerSlot::ALL
            .into_iter()
            .find(|slot| self.get(*slot) >= win_score)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub wall_bounce: bool,
    pub paddle_hit: Option<PlayerSlot>,
    pub scored: Option<PlayerSlot>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Match lifecycle. `Finished` is terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchState {
    #[default]
    Playing,
    Finished {
        winner: PlayerSlot,
    },
}

impl MatchState {
    pub fn winner(&self) -> Option<PlayerSlot> {
        match self {
            MatchState::Playing => None,
            MatchState::Finished { winner } => Some(*winner),
        }
    }
}
