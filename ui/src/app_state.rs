use crate::i18n::Catalogs;
use std::ops::Deref;
use std::sync::Arc;

/// Immutable data shared by every screen once the app has loaded.
#[derive(Debug, PartialEq, Eq)]
pub struct AppStateData {
    pub catalogs: Arc<Catalogs>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(catalogs: Catalogs) -> Self {
        Self(Arc::new(AppStateData {
            catalogs: Arc::new(catalogs),
        }))
    }
}
