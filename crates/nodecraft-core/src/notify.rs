use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
    Warning,
}

impl ToastKind {
    pub fn color(self) -> &'static str {
        match self {
            ToastKind::Success => "#00d9ff",
            ToastKind::Error => "#ff4444",
            ToastKind::Info => "#333333",
            ToastKind::Warning => "#ff9800",
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            ToastKind::Success => "notification notification--success",
            ToastKind::Error => "notification notification--error",
            ToastKind::Info => "notification notification--info",
            ToastKind::Warning => "notification notification--warning",
        }
    }
}

pub type ToastId = u32;
pub type ToastIds = SmallVec<[ToastId; 2]>;

/// Tracks which toasts are on screen. Only one stays visible at a time.
#[derive(Clone, Debug, Default)]
pub struct ToastBoard {
    next_id: ToastId,
    live: ToastIds,
}

impl ToastBoard {
    /// Register a new toast; returns its id and the ids it displaces.
    pub fn show(&mut self) -> (ToastId, ToastIds) {
        let displaced = std::mem::take(&mut self.live);
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.live.push(id);
        (id, displaced)
    }

    /// Returns `true` only for the first dismissal of a live toast, so a
    /// click racing the auto-dismiss timer removes the node once.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        match self.live.iter().position(|&l| l == id) {
            Some(i) => {
                self.live.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn dismiss_all(&mut self) -> ToastIds {
        std::mem::take(&mut self.live)
    }

    #[inline]
    pub fn live(&self) -> &[ToastId] {
        &self.live
    }
}
