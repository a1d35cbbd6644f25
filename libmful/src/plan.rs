// libmful/src/plan.rs

//! Per-page write/skip decisions for a restore session.
//!
//! The engine never prompts: callers resolve all four permission flags before
//! building a plan. Pages 0-1 carry the UID, page 2 the static lock bytes,
//! page 3 the OTP/capability bytes, and some variants add dynamic lock bytes
//! at a higher page; each group is only written when its flag is set.

use crate::variant::Variant;

/// Caller-resolved write permissions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteFlags {
    /// Write the OTP/capability bytes (page 3).
    pub otp: bool,
    /// Write the static lock bytes (page 2). Lock bits are OTP if set.
    pub lock: bool,
    /// Write the dynamic lock bytes (MF0UL21 and NTAG only).
    pub dynamic_lock: bool,
    /// Write the UID pages (0-1); requires an unlockable tag.
    pub uid: bool,
}

impl WriteFlags {
    /// Permit everything - a full byte-for-byte restore.
    pub fn all() -> Self {
        Self {
            otp: true,
            lock: true,
            dynamic_lock: true,
            uid: true,
        }
    }
}

/// What to do with one page during write-back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    Write,
    Skip,
}

/// Resolved write plan for one variant.
#[derive(Debug, Clone, Copy)]
pub struct WritePlan {
    flags: WriteFlags,
    dynamic_lock_page: Option<u32>,
}

impl WritePlan {
    pub fn new(flags: WriteFlags, variant: &Variant) -> Self {
        Self {
            flags,
            dynamic_lock_page: variant.dynamic_lock_page,
        }
    }

    /// Whether the plan includes the UID pages, which gates the unlock
    /// sequence before any page is written.
    pub fn rewrites_uid(&self) -> bool {
        self.flags.uid
    }

    /// Decide whether `page` is written or skipped.
    pub fn action(&self, page: u32) -> PageAction {
        match page {
            0 | 1 if !self.flags.uid => PageAction::Skip,
            2 if !self.flags.lock => PageAction::Skip,
            3 if !self.flags.otp => PageAction::Skip,
            p if Some(p) == self.dynamic_lock_page && !self.flags.dynamic_lock => PageAction::Skip,
            _ => PageAction::Write,
        }
    }
}
