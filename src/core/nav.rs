use super::constants::{GLITCH_PROBABILITY, STATUS_FLICKER_PROBABILITY};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkStatus {
    Active,
    Standby,
}

impl LinkStatus {
    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            LinkStatus::Active => "[ACTIVE]",
            LinkStatus::Standby => "[STANDBY]",
        }
    }
}

/// Values the global status readout may flicker to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SystemStatus {
    Online,
    Syncing,
    Scanning,
    Active,
}

impl SystemStatus {
    pub const ALL: [SystemStatus; 4] = [
        SystemStatus::Online,
        SystemStatus::Syncing,
        SystemStatus::Scanning,
        SystemStatus::Active,
    ];

    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            SystemStatus::Online => "[ONLINE]",
            SystemStatus::Syncing => "[SYNCING]",
            SystemStatus::Scanning => "[SCANNING]",
            SystemStatus::Active => "[ACTIVE]",
        }
    }
}

/// Status labels and selection for a fixed set of nav links.
///
/// At most one link is selected at any time. Out-of-range indices are ignored.
#[derive(Clone, Debug)]
pub struct NavState {
    statuses: Vec<LinkStatus>,
    processing: Vec<bool>,
    selected: Option<usize>,
}

impl NavState {
    pub fn new(link_count: usize) -> Self {
        Self {
            statuses: vec![LinkStatus::Standby; link_count],
            processing: vec![false; link_count],
            selected: None,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    pub fn status(&self, index: usize) -> LinkStatus {
        self.statuses
            .get(index)
            .copied()
            .unwrap_or(LinkStatus::Standby)
    }

    #[inline]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[inline]
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    pub fn enter(&mut self, index: usize) -> LinkStatus {
        if let Some(s) = self.statuses.get_mut(index) {
            *s = LinkStatus::Active;
        }
        self.status(index)
    }

    /// Selected links stay active when the pointer leaves.
    pub fn leave(&mut self, index: usize) -> LinkStatus {
        if !self.is_selected(index) {
            if let Some(s) = self.statuses.get_mut(index) {
                *s = LinkStatus::Standby;
            }
        }
        self.status(index)
    }

    pub fn click(&mut self, index: usize) {
        if index >= self.statuses.len() {
            return;
        }
        self.statuses.fill(LinkStatus::Standby);
        self.statuses[index] = LinkStatus::Active;
        self.selected = Some(index);
    }

    /// Mark a link as showing the processing placeholder. Returns false if it
    /// already is, so the placeholder is never captured as the original text.
    pub fn begin_processing(&mut self, index: usize) -> bool {
        match self.processing.get_mut(index) {
            Some(p) if !*p => {
                *p = true;
                true
            }
            _ => false,
        }
    }

    pub fn finish_processing(&mut self, index: usize) {
        if let Some(p) = self.processing.get_mut(index) {
            *p = false;
        }
    }

    #[inline]
    pub fn is_processing(&self, index: usize) -> bool {
        self.processing.get(index).copied().unwrap_or(false)
    }
}

#[inline]
pub fn roll_glitch<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.gen_bool(GLITCH_PROBABILITY)
}

pub fn roll_status_flicker<R: Rng + ?Sized>(rng: &mut R) -> Option<SystemStatus> {
    if !rng.gen_bool(STATUS_FLICKER_PROBABILITY) {
        return None;
    }
    let i = rng.gen_range(0..SystemStatus::ALL.len());
    Some(SystemStatus::ALL[i])
}
