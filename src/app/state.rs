use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum AppPhase {
    #[default]
    Boot,
    InGame,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum SalonTab {
    #[default]
    Salon,
    Celebrities,
}

impl SalonTab {
    pub fn toggled(self) -> Self {
        match self {
            Self::Salon => Self::Celebrities,
            Self::Celebrities => Self::Salon,
        }
    }
}
