//! The [`View`] trait implemented by everything a grid can hold.
//!
//! A view measures itself against a pair of [`MeasureSpec`]s and paints into
//! the rectangle its container assigns. Views are stored as
//! `Box<dyn View>`; use [`View::downcast_ref`](trait.View.html#method.downcast_ref)
//! or [`downcast_view`] to get the concrete type back.

use std::any::Any;

use gridlayout_render::{Canvas, Rect, Size};

use super::geometry::{LayoutParams, MeasureSpec};

/// Upcasting helper so trait objects can be downcast.
///
/// Implemented automatically for every `'static` type.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// A measurable, paintable element.
pub trait View: AsAny + Send + Sync {
    /// Compute the size this view wants under the given constraints.
    ///
    /// Called by the container on every measure pass; the returned size is
    /// recorded as the child's measured size.
    fn measure(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> Size;

    /// Paint the view into `bounds`.
    fn draw(&self, canvas: &mut dyn Canvas, bounds: Rect);

    /// Layout params the view asks for when it is added to a container.
    ///
    /// `None` lets the container attach its defaults.
    fn layout_params(&self) -> Option<LayoutParams> {
        None
    }

    /// Short human readable description for debug output.
    fn describe(&self) -> String {
        let name = std::any::type_name::<Self>();
        name.rsplit("::").next().unwrap_or(name).to_string()
    }
}

impl dyn View + '_ {
    /// Check whether the view is of concrete type `V`.
    pub fn is<V: View>(&self) -> bool {
        self.as_any().is::<V>()
    }

    /// Borrow the view as concrete type `V`.
    pub fn downcast_ref<V: View>(&self) -> Option<&V> {
        self.as_any().downcast_ref::<V>()
    }

    /// Mutably borrow the view as concrete type `V`.
    pub fn downcast_mut<V: View>(&mut self) -> Option<&mut V> {
        self.as_any_mut().downcast_mut::<V>()
    }
}

impl std::fmt::Debug for dyn View + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Take ownership of a boxed view as concrete type `V`.
///
/// Returns `None` (dropping the view) when the types do not match. Adapters
/// use this to decide whether a recycled view can be refreshed in place.
pub fn downcast_view<V: View>(view: Box<dyn View>) -> Option<Box<V>> {
    view.into_any().downcast::<V>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridlayout_render::DisplayList;

    struct Fixed(Size);

    impl View for Fixed {
        fn measure(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> Size {
            Size::new(width_spec.resolve(self.0.width), height_spec.resolve(self.0.height))
        }

        fn draw(&self, _canvas: &mut dyn Canvas, _bounds: Rect) {}
    }

    struct Other;

    impl View for Other {
        fn measure(&mut self, _: MeasureSpec, _: MeasureSpec) -> Size {
            Size::ZERO
        }

        fn draw(&self, _canvas: &mut dyn Canvas, _bounds: Rect) {}
    }

    #[test]
    fn test_downcast_ref() {
        let view: Box<dyn View> = Box::new(Fixed(Size::new(3, 4)));
        assert!(view.is::<Fixed>());
        assert!(!view.is::<Other>());
        assert_eq!(view.downcast_ref::<Fixed>().map(|f| f.0), Some(Size::new(3, 4)));
    }

    #[test]
    fn test_downcast_view_by_value() {
        let view: Box<dyn View> = Box::new(Fixed(Size::new(1, 1)));
        assert!(downcast_view::<Other>(view).is_none());

        let view: Box<dyn View> = Box::new(Other);
        assert!(downcast_view::<Other>(view).is_some());
    }

    #[test]
    fn test_describe_and_measure() {
        let mut view: Box<dyn View> = Box::new(Fixed(Size::new(100, 50)));
        assert_eq!(view.describe(), "Fixed");
        let size = view.measure(MeasureSpec::exactly(105), MeasureSpec::unspecified(0));
        assert_eq!(size, Size::new(105, 50));

        let mut list = DisplayList::new();
        view.draw(&mut list, Rect::ZERO);
        assert!(list.is_empty());
    }
}
