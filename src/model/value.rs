//! Traits for values stored in a tree and for sources of new children.

use crate::model::tree::Tree;

// =#========================================================================#=
// TREE VALUE TRAIT
// =#========================================================================T=
/// Trait for values a [Tree] can hold.
///
/// Equality drives duplicate detection and value-based removal.
/// [is_null](TreeValue::is_null) lets a tree configured to reject null
/// recognise an absent value; for most types no value is null.
///
/// # Example
/// ```
/// use cursortree::TreeValue;
///
/// #[derive(PartialEq)]
/// struct Taxon(String);
///
/// impl TreeValue for Taxon {
///     fn is_null(&self) -> bool {
///         self.0.is_empty()
///     }
/// }
/// ```
pub trait TreeValue: PartialEq {
    /// Returns whether this value counts as null.
    fn is_null(&self) -> bool {
        false
    }
}

macro_rules! impl_never_null {
    ($($t:ty),* $(,)?) => {
        $(impl TreeValue for $t {})*
    };
}

impl_never_null!(
    (), bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    String,
);

impl TreeValue for &str {}

impl<U: TreeValue + ?Sized> TreeValue for Box<U> {
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<U: PartialEq> TreeValue for Vec<U> {}

impl<U: PartialEq> TreeValue for Option<U> {
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

// =#========================================================================#=
// CHILD VALUES TRAIT
// =#========================================================================T=
/// Sources for the bulk adders
/// [add_all_children](Tree::add_all_children) and
/// [insert_all_children](Tree::insert_all_children).
///
/// Collections contribute each element as its own child. A borrowed [Tree]
/// contributes only its root value as one child, since its structure is not
/// merged. Borrowed sources are cloned from and never modified.
pub trait ChildValues<T> {
    /// Converts the source into the values to add, in order.
    fn into_child_values(self) -> Vec<T>;
}

impl<T> ChildValues<T> for Vec<T> {
    fn into_child_values(self) -> Vec<T> {
        self
    }
}

impl<T, const N: usize> ChildValues<T> for [T; N] {
    fn into_child_values(self) -> Vec<T> {
        self.into()
    }
}

impl<T: Clone> ChildValues<T> for &[T] {
    fn into_child_values(self) -> Vec<T> {
        self.to_vec()
    }
}

impl<T: Clone> ChildValues<T> for &Vec<T> {
    fn into_child_values(self) -> Vec<T> {
        self.clone()
    }
}

impl<T: Clone> ChildValues<T> for &Tree<T> {
    fn into_child_values(self) -> Vec<T> {
        vec![self.root().clone()]
    }
}
