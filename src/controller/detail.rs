//! Item detail controller.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, error};

use crate::detail::DetailView;
use crate::notice::{DETAIL_LOAD_FAILED, Notice};
use crate::remote::ItemSource;

/// Opens item details. Holds no list state and caches nothing.
pub struct DetailController<S> {
    source: Arc<S>,
    notice: Mutex<Option<Notice>>,
}

impl<S: ItemSource> DetailController<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            notice: Mutex::new(None),
        }
    }

    /// Fetch and normalize item `id`. On failure a notice is recorded and
    /// `None` is returned.
    pub async fn open(&self, id: i64) -> Option<DetailView> {
        debug!(id, "opening item detail");
        match self.source.fetch_item(id).await {
            Ok(record) => {
                *self.notice.lock() = None;
                Some(DetailView::from_record(record))
            }
            Err(e) => {
                error!(id, error = %e, "failed to load item details");
                *self.notice.lock() = Some(Notice::error(DETAIL_LOAD_FAILED).with_detail(&e));
                None
            }
        }
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice.lock().clone()
    }

    pub fn take_notice(&self) -> Option<Notice> {
        self.notice.lock().take()
    }
}
