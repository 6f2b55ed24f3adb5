use crate::catalog::{Catalog, FoodId};

/// Which overlays are showing.
///
/// The image viewer only ever stacks on top of an open detail modal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Closed,
    Detail {
        id: FoodId,
    },
    Viewer {
        id: FoodId,
        src: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    OpenDetail(FoodId),
    CloseDetail,
    OpenViewer(String),
    CloseViewer,
    Escape,
}

impl ViewState {
    /// Id of the item shown in the detail modal, if one is open.
    #[must_use]
    pub const fn detail_id(&self) -> Option<FoodId> {
        match self {
            Self::Closed => None,
            Self::Detail { id } | Self::Viewer { id, .. } => Some(*id),
        }
    }

    #[must_use]
    pub fn viewer_src(&self) -> Option<&str> {
        match self {
            Self::Viewer { src, .. } => Some(src.as_str()),
            Self::Closed | Self::Detail { .. } => None,
        }
    }

    #[must_use]
    pub const fn is_detail_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    #[must_use]
    pub const fn is_viewer_open(&self) -> bool {
        matches!(self, Self::Viewer { .. })
    }

    /// Next state after `action`.
    ///
    /// `catalog` is consulted to ignore requests for ids that do not exist;
    /// without a catalog nothing can be opened. Pairs with no defined
    /// transition leave the state unchanged.
    #[must_use]
    pub fn apply(&self, action: ViewAction, catalog: Option<&Catalog>) -> Self {
        match (self, action) {
            (Self::Closed, ViewAction::OpenDetail(id)) => {
                if catalog.is_some_and(|c| c.contains(id)) {
                    Self::Detail { id }
                } else {
                    self.clone()
                }
            }
            (Self::Detail { .. }, ViewAction::CloseDetail | ViewAction::Escape) => Self::Closed,
            (Self::Detail { id }, ViewAction::OpenViewer(src)) => Self::Viewer { id: *id, src },
            (Self::Viewer { id, .. }, ViewAction::CloseViewer | ViewAction::Escape) => {
                Self::Detail { id: *id }
            }
            _ => self.clone(),
        }
    }
}
