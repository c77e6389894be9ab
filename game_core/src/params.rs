/// Timing constants shared by every difficulty
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Speed
    pub const MIN_SPEED_MS: u64 = 250; // Hard floor for flash spacing
    pub const MAX_SPEED_MS: u64 = 10_000; // Slowest spacing a config may ask for

    // Delays
    pub const START_DELAY_MS: u64 = 1200; // Start button -> level 1
    pub const LEVEL_COMPLETE_DELAY_MS: u64 = 1000; // "Correct!" -> next level

    // Playback fractions of the current speed
    pub const FLASH_NUM: u64 = 3; // Flash lasts 3/5 of the spacing
    pub const FLASH_DEN: u64 = 5;
    pub const TURN_LEAD_IN_DEN: u64 = 5; // 1/5 of the spacing after the last flash
}

impl Params {
    /// How long a pad stays lit at the given speed
    pub fn flash_duration(speed_ms: u64) -> u64 {
        speed_ms.saturating_mul(Self::FLASH_NUM) / Self::FLASH_DEN
    }

    /// Gap between the last scheduled flash and the player's turn
    pub fn turn_lead_in(speed_ms: u64) -> u64 {
        speed_ms / Self::TURN_LEAD_IN_DEN
    }
}
