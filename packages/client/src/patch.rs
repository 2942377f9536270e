/// Element a patch applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Id(&'static str),
    /// Nth element with the catalog card class.
    CatalogItem(usize),
    /// Nth element with the category pill class.
    CategoryPill(usize),
}

/// One DOM change. Applying the same patch twice has the same effect as
/// applying it once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomPatch {
    SetText {
        target: Target,
        text: String,
    },
    /// `html` is produced by the component renderer and already escaped.
    SetInnerHtml {
        target: Target,
        html: String,
    },
    /// Toggles the `hidden` class.
    SetHidden {
        target: Target,
        hidden: bool,
    },
    /// Toggles inline `display: none`.
    SetDisplayed {
        target: Target,
        displayed: bool,
    },
    SwapClasses {
        target: Target,
        remove: &'static [&'static str],
        add: &'static [&'static str],
    },
    AddClass {
        target: Target,
        class: &'static str,
    },
    Notify {
        message: String,
    },
}

impl DomPatch {
    pub fn target(&self) -> Option<Target> {
        match self {
            DomPatch::SetText { target, .. }
            | DomPatch::SetInnerHtml { target, .. }
            | DomPatch::SetHidden { target, .. }
            | DomPatch::SetDisplayed { target, .. }
            | DomPatch::SwapClasses { target, .. }
            | DomPatch::AddClass { target, .. } => Some(*target),
            DomPatch::Notify { .. } => None,
        }
    }
}
