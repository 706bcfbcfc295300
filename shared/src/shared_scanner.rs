use serde::{Serialize, Deserialize};

use crate::constants::SCAN_STEP;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum CameraStatus {
    Pending,
    Ready,
    Denied,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum ScanPhase {
    Idle,
    Scanning,
    // Reached 100% and waiting for the settle delay before showing results
    Settling,
    Finished,
}

/// The "cuteness scan": a progress counter driven by a fast interval.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct ScanMeter {
    progress: u8,
    phase: ScanPhase,
    camera: CameraStatus,
}

impl Default for ScanMeter {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanMeter {
    pub fn new() -> Self {
        Self {
            progress: 0,
            phase: ScanPhase::Idle,
            camera: CameraStatus::Pending,
        }
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn phase(&self) -> ScanPhase {
        self.phase
    }

    pub fn set_camera(&mut self, camera: CameraStatus) {
        self.camera = camera;
    }

    pub fn can_start(&self) -> bool {
        self.camera == CameraStatus::Ready && self.phase == ScanPhase::Idle
    }

    pub fn start(&mut self) -> bool {
        if !self.can_start() {
            return false;
        }
        self.progress = 0;
        self.phase = ScanPhase::Scanning;
        true
    }

    /// Advances the scan by one step. Returns true on the tick that reaches
    /// 100%, after which the caller waits for the settle delay and calls
    /// `finish`.
    pub fn tick(&mut self) -> bool {
        if self.phase != ScanPhase::Scanning {
            return false;
        }
        self.progress = self.progress.saturating_add(SCAN_STEP).min(100);
        if self.progress == 100 {
            self.phase = ScanPhase::Settling;
            return true;
        }
        false
    }

    pub fn finish(&mut self) {
        if self.phase == ScanPhase::Settling {
            self.phase = ScanPhase::Finished;
        }
    }

    pub fn is_scanning(&self) -> bool {
        matches!(self.phase, ScanPhase::Scanning | ScanPhase::Settling)
    }

    pub fn show_result(&self) -> bool {
        self.phase == ScanPhase::Finished
    }

    /// No camera is not a dead end.
    pub fn can_continue(&self) -> bool {
        self.show_result() || self.camera == CameraStatus::Denied
    }

    pub fn stage_message(&self) -> &'static str {
        scan_message(self.progress)
    }
}

pub fn scan_message(progress: u8) -> &'static str {
    match progress {
        0..=29 => "Detecting smile frequency…",
        30..=59 => "Analyzing sparkle levels…",
        60..=89 => "Measuring heart resonance…",
        _ => "Cuteness limit exceeded…",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_needs_camera() {
        let mut meter = ScanMeter::new();
        assert!(!meter.start());
        meter.set_camera(CameraStatus::Ready);
        assert!(meter.start());
        assert!(meter.is_scanning());
    }

    #[test]
    fn test_scan_runs_to_hundred_then_settles() {
        let mut meter = ScanMeter::new();
        meter.set_camera(CameraStatus::Ready);
        meter.start();
        let mut ticks = 0;
        while !meter.tick() {
            ticks += 1;
            assert!(ticks < 100);
        }
        assert_eq!(meter.progress(), 100);
        assert_eq!(ticks + 1, 50);
        assert_eq!(meter.phase(), ScanPhase::Settling);
        assert!(!meter.can_continue());
        assert!(!meter.tick());

        meter.finish();
        assert!(meter.show_result());
        assert!(meter.can_continue());
        assert!(!meter.start());
    }

    #[test]
    fn test_denied_camera_can_continue() {
        let mut meter = ScanMeter::new();
        meter.set_camera(CameraStatus::Denied);
        assert!(meter.can_continue());
        assert!(!meter.start());
    }

    #[test]
    fn test_stage_messages() {
        assert_eq!(scan_message(0), "Detecting smile frequency…");
        assert_eq!(scan_message(30), "Analyzing sparkle levels…");
        assert_eq!(scan_message(89), "Measuring heart resonance…");
        assert_eq!(scan_message(90), "Cuteness limit exceeded…");
    }
}
