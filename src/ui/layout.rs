use crate::ui::TextField;
use std::collections::HashMap;
use std::fmt::{Display, Formatter};

/// Stable identifier of a view in a layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewId {
    Latitude,
    Longitude,
}

impl Display for ViewId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewId::Latitude => f.write_str("text_latitude"),
            ViewId::Longitude => f.write_str("text_longitude"),
        }
    }
}

#[derive(Debug, Default)]
pub struct Layout {
    views: HashMap<ViewId, TextField>,
}

impl Layout {
    /// The location screen's layout, with every field showing `placeholder`.
    pub fn new(placeholder: &str) -> Self {
        Self::with_views([TextField::new(ViewId::Latitude, placeholder), TextField::new(ViewId::Longitude, placeholder)])
    }

    pub fn with_views(views: impl IntoIterator<Item = TextField>) -> Self {
        Layout {
            views: views.into_iter().map(|view| (view.id(), view)).collect(),
        }
    }

    pub fn find_view_by_id(&self, id: ViewId) -> Option<TextField> {
        self.views.get(&id).cloned()
    }
}
