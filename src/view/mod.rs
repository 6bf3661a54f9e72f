//! Views: the visual elements animations act on.
//!
//! A [`View`] carries the properties that can be animated (rotation,
//! translation, scale, alpha, background color) plus a fixed layout size and
//! position inside its parent. Views live in a [`ViewTree`] and are addressed
//! by [`ViewId`].

mod transform;
mod tree;

pub use transform::Transform;
pub use tree::{ViewId, ViewTree};

use bitflags::bitflags;

use crate::color::Color;

bitflags! {
    /// Which visual aspects of a view changed since the renderer last looked.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct DirtyFlags: u8 {
        const TRANSFORM = 1 << 0;
        const ALPHA = 1 << 1;
        const BACKGROUND = 1 << 2;
    }
}

/// An animatable property of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    /// Rotation around the view's center, in degrees (clockwise)
    Rotation,
    TranslationX,
    TranslationY,
    ScaleX,
    ScaleY,
    /// Opacity, clamped to [0, 1]
    Alpha,
    BackgroundColor,
}

impl Property {
    fn dirty_flag(self) -> DirtyFlags {
        match self {
            Property::Rotation
            | Property::TranslationX
            | Property::TranslationY
            | Property::ScaleX
            | Property::ScaleY => DirtyFlags::TRANSFORM,
            Property::Alpha => DirtyFlags::ALPHA,
            Property::BackgroundColor => DirtyFlags::BACKGROUND,
        }
    }
}

/// Value of a [`Property`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyValue {
    Float(f32),
    Color(Color),
}

impl PropertyValue {
    pub fn as_float(self) -> Option<f32> {
        match self {
            PropertyValue::Float(v) => Some(v),
            PropertyValue::Color(_) => None,
        }
    }

    pub fn as_color(self) -> Option<Color> {
        match self {
            PropertyValue::Color(c) => Some(c),
            PropertyValue::Float(_) => None,
        }
    }
}

impl From<f32> for PropertyValue {
    fn from(value: f32) -> Self {
        PropertyValue::Float(value)
    }
}

impl From<Color> for PropertyValue {
    fn from(value: Color) -> Self {
        PropertyValue::Color(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn scaled(self, factor: f32) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// A displayable element with animatable visual properties.
#[derive(Debug, Clone)]
pub struct View {
    name: String,
    size: Size,
    /// Layout position inside the parent, before the transform applies
    origin: (f32, f32),
    transform: Transform,
    alpha: f32,
    background: Color,
    dirty: DirtyFlags,
}

impl View {
    pub fn new(name: impl Into<String>, size: Size) -> Self {
        Self {
            name: name.into(),
            size,
            origin: (0.0, 0.0),
            transform: Transform::IDENTITY,
            alpha: 1.0,
            background: Color::TRANSPARENT,
            dirty: DirtyFlags::empty(),
        }
    }

    pub fn with_origin(mut self, x: f32, y: f32) -> Self {
        self.origin = (x, y);
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn origin(&self) -> (f32, f32) {
        self.origin
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn property(&self, property: Property) -> PropertyValue {
        match property {
            Property::Rotation => self.transform.rotation.into(),
            Property::TranslationX => self.transform.translate.0.into(),
            Property::TranslationY => self.transform.translate.1.into(),
            Property::ScaleX => self.transform.scale.0.into(),
            Property::ScaleY => self.transform.scale.1.into(),
            Property::Alpha => self.alpha.into(),
            Property::BackgroundColor => self.background.into(),
        }
    }

    /// Write a property value. Values of the wrong kind are ignored.
    pub fn set_property(&mut self, property: Property, value: PropertyValue) {
        match (property, value) {
            (Property::BackgroundColor, PropertyValue::Color(c)) => self.background = c,
            (Property::BackgroundColor, PropertyValue::Float(_)) => return,
            (_, PropertyValue::Color(_)) => return,
            (Property::Rotation, PropertyValue::Float(v)) => self.transform.rotation = v,
            (Property::TranslationX, PropertyValue::Float(v)) => self.transform.translate.0 = v,
            (Property::TranslationY, PropertyValue::Float(v)) => self.transform.translate.1 = v,
            (Property::ScaleX, PropertyValue::Float(v)) => self.transform.scale.0 = v,
            (Property::ScaleY, PropertyValue::Float(v)) => self.transform.scale.1 = v,
            (Property::Alpha, PropertyValue::Float(v)) => self.alpha = v.clamp(0.0, 1.0),
        }
        self.dirty |= property.dirty_flag();
    }

    /// Bounding box of the transformed view in parent coordinates.
    pub fn visual_bounds(&self) -> Rect {
        let Size { width, height } = self.size;
        let corners = [(0.0, 0.0), (width, 0.0), (0.0, height), (width, height)]
            .map(|(x, y)| self.transform.apply_to_point(x, y, width, height));

        let (mut min_x, mut min_y) = (f32::INFINITY, f32::INFINITY);
        let (mut max_x, mut max_y) = (f32::NEG_INFINITY, f32::NEG_INFINITY);
        for (x, y) in corners {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
        Rect::new(
            self.origin.0 + min_x,
            self.origin.1 + min_y,
            max_x - min_x,
            max_y - min_y,
        )
    }

    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// Return and clear the accumulated dirty flags.
    pub fn take_dirty(&mut self) -> DirtyFlags {
        std::mem::replace(&mut self.dirty, DirtyFlags::empty())
    }
}
