use crate::constants::{CLASS_FLEX, CLASS_HIDDEN};

/// Minimal view of an element's class list.
///
/// Mutations never fail from the caller's point of view; implementations
/// swallow platform errors the same way a missing element is swallowed.
pub trait ClassList {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;
}

/// Lookup of elements by identifier.
///
/// `Element` equality must be identity: two handles compare equal only when
/// they refer to the same node.
pub trait Page {
    type Element: ClassList + PartialEq;

    fn element(&self, id: &str) -> Option<Self::Element>;
}

/// Apply the hidden/flex display pair.
#[inline]
pub fn set_display<E: ClassList + ?Sized>(el: &E, visible: bool) {
    if visible {
        el.remove_class(CLASS_HIDDEN);
        el.add_class(CLASS_FLEX);
    } else {
        el.add_class(CLASS_HIDDEN);
        el.remove_class(CLASS_FLEX);
    }
}

/// Apply the hidden marker alone (icons keep their own display class).
#[inline]
pub fn set_hidden<E: ClassList + ?Sized>(el: &E, hidden: bool) {
    if hidden {
        el.add_class(CLASS_HIDDEN);
    } else {
        el.remove_class(CLASS_HIDDEN);
    }
}

#[inline]
pub fn is_shown<E: ClassList + ?Sized>(el: &E) -> bool {
    !el.has_class(CLASS_HIDDEN)
}
