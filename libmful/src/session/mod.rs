// libmful/src/session/mod.rs

//! Session object owning the radio handle, the dump image, the detected
//! variant and the session secrets. Every core operation takes the session
//! by reference; there are no process-wide singletons.

use std::thread;
use std::time::Duration;

use log::debug;

use crate::constants::DEFAULT_PLAIN_PAGES;
use crate::image::DumpImage;
use crate::radio::Radio;
use crate::secrets::Secrets;
use crate::types::{Target, Uid};
use crate::variant::Variant;
use crate::{Error, Result};

mod auth;
mod probe;
mod raw;
mod read;
mod unlock;
mod write;

pub use read::ReadSummary;
pub use write::WriteSummary;

/// Caller-resolved session parameters.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Select only a tag whose UID starts with this value.
    pub uid_filter: Option<Uid>,
    /// Poll for a tag instead of failing fast when none is in the field.
    pub wait_for_tag: bool,
    /// Interval between selection attempts while waiting.
    pub poll_interval: Duration,
    /// Page count assumed for plain Ultralight tags (no version response).
    pub default_page_count: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            uid_filter: None,
            wait_for_tag: false,
            poll_interval: crate::utils::poll_interval(),
            default_page_count: DEFAULT_PLAIN_PAGES,
        }
    }
}

/// One dump/restore session against a single tag.
///
/// The session is strictly single-threaded and synchronous: one command is
/// in flight at a time, and the session owns the radio handle exclusively
/// for its whole lifetime.
pub struct Session {
    radio: Box<dyn Radio>,
    config: SessionConfig,
    target: Option<Target>,
    variant: Variant,
    image: DumpImage,
    secrets: Option<Secrets>,
}

impl Session {
    /// Create a session with default configuration.
    pub fn new(radio: Box<dyn Radio>) -> Self {
        Self::with_config(radio, SessionConfig::default())
    }

    /// Create a session with an explicit configuration.
    pub fn with_config(radio: Box<dyn Radio>, config: SessionConfig) -> Self {
        let variant = Variant::plain(config.default_page_count);
        Self {
            radio,
            config,
            target: None,
            variant,
            image: DumpImage::new(),
            secrets: None,
        }
    }

    /// Select an Ultralight-class tag in the field.
    ///
    /// Fails fast with [`Error::NoTag`] when nothing is selectable, unless
    /// the config asks to wait, in which case selection is retried on a
    /// fixed interval until a tag appears. A selected tag that is not
    /// Ultralight-class is fatal.
    pub fn connect(&mut self) -> Result<Target> {
        let target = loop {
            match self.select_once() {
                Ok(target) => break target,
                Err(_) if self.config.wait_for_tag => thread::sleep(self.config.poll_interval),
                Err(_) => return Err(Error::NoTag),
            }
        };

        if !target.atqa.is_ultralight() {
            return Err(Error::NotUltralight {
                atqa: *target.atqa.as_bytes(),
            });
        }

        debug!("using Ultralight tag with UID {}", target.uid.to_hex());
        self.image.reset();
        self.target = Some(target);
        Ok(target)
    }

    /// Enumerate targets currently in the field, when the radio supports it.
    pub fn list_targets(&mut self, max_targets: usize) -> Result<Vec<Target>> {
        let targets = self.radio.list_targets(max_targets)?;
        if !targets.is_empty() {
            debug!("{} ISO14443A passive target(s) found", targets.len());
            for target in &targets {
                debug!("  {}", target.uid.to_hex());
            }
        }
        Ok(targets)
    }

    fn select_once(&mut self) -> Result<Target> {
        let filter: Option<Vec<u8>> = self
            .config
            .uid_filter
            .map(|uid| uid.as_bytes().to_vec());
        self.radio.select_target(filter.as_deref())
    }

    /// Redo anti-collision after a raw-mode transaction or a failed write
    /// left the tag's protocol state machine out of step.
    pub(crate) fn reselect(&mut self) -> Result<Target> {
        let target = self.select_once()?;
        self.target = Some(target);
        Ok(target)
    }

    /// The variant detected by [`Session::probe`], or the plain default.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Supply the variant out-of-band, for restoring a dump without probing.
    pub fn set_variant(&mut self, variant: Variant) {
        self.variant = variant;
    }

    /// The currently selected target, if any.
    pub fn target(&self) -> Option<&Target> {
        self.target.as_ref()
    }

    /// The session secrets recorded by [`Session::authenticate`].
    pub fn secrets(&self) -> Option<&Secrets> {
        self.secrets.as_ref()
    }

    /// The full in-memory dump image.
    pub fn image(&self) -> &DumpImage {
        &self.image
    }

    /// The meaningful dump bytes for the active variant.
    pub fn dump(&self) -> &[u8] {
        self.image.dump(self.variant.page_count)
    }

    /// Load a previously persisted dump as the write-back source. The data
    /// must be exactly the active variant's dump size.
    pub fn load_dump(&mut self, data: &[u8]) -> Result<()> {
        self.image.load(data, self.variant.page_count)
    }

    pub(crate) fn radio_mut(&mut self) -> &mut dyn Radio {
        self.radio.as_mut()
    }

    pub(crate) fn image_mut(&mut self) -> &mut DumpImage {
        &mut self.image
    }

    pub(crate) fn store_secrets(&mut self, secrets: Secrets) {
        self.secrets = Some(secrets);
    }

    pub(crate) fn store_variant(&mut self, variant: Variant) {
        self.variant = variant;
    }

    pub(crate) fn default_page_count(&self) -> u32 {
        self.config.default_page_count
    }
}

/// Builder mirroring the usual construction flow: radio first, then the
/// optional knobs.
pub struct SessionBuilder {
    radio: Box<dyn Radio>,
    config: SessionConfig,
}

impl SessionBuilder {
    pub fn new(radio: Box<dyn Radio>) -> Self {
        Self {
            radio,
            config: SessionConfig::default(),
        }
    }

    /// Select only tags whose UID starts with `uid`.
    pub fn uid_filter(mut self, uid: Uid) -> Self {
        self.config.uid_filter = Some(uid);
        self
    }

    /// Poll for a tag instead of failing fast.
    pub fn wait_for_tag(mut self, wait: bool) -> Self {
        self.config.wait_for_tag = wait;
        self
    }

    /// Interval between selection attempts while waiting.
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.config.poll_interval = interval;
        self
    }

    /// Page count assumed for tags that answer no version query.
    pub fn default_page_count(mut self, pages: u32) -> Self {
        self.config.default_page_count = pages;
        self
    }

    pub fn build(self) -> Session {
        Session::with_config(self.radio, self.config)
    }
}
