use std::sync::Arc;

use crate::capture::{CaptureOptions, ImageService};
use crate::store::Store;

/// Everything the screens need, created once during start-up.
#[derive(Clone, Debug)]
pub struct Session(Arc<SessionInner>);

#[derive(Debug)]
struct SessionInner {
    store: Store,
    images: ImageService,
    capture: CaptureOptions,
}

impl Session {
    pub fn new(store: Store, images: ImageService, capture: CaptureOptions) -> Session {
        Session(Arc::new(SessionInner {
            store,
            images,
            capture,
        }))
    }

    pub fn store(&self) -> &Store {
        &self.0.store
    }

    pub fn images(&self) -> &ImageService {
        &self.0.images
    }

    pub fn capture_options(&self) -> CaptureOptions {
        self.0.capture
    }
}
