use core::f64::consts::TAU;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Drawing layers, listed in paint order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Layer {
    Level,
    GameOver,
    Win,
}

impl Layer {
    pub const ALL: [Layer; 3] = [Layer::Level, Layer::GameOver, Layer::Win];

    const fn slot(self) -> usize {
        match self {
            Self::Level => 0,
            Self::GameOver => 1,
            Self::Win => 2,
        }
    }
}

/// What a pointer-down or touch-start on a node or layer asks the controller to do.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    ActivateTile(usize),
    Restart,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Fill {
    Rgb(Rgb),
    Black,
    White,
}

impl fmt::Display for Fill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb(rgb) => write!(f, "{}", CssRgb(*rgb)),
            Self::Black => f.write_str("black"),
            Self::White => f.write_str("white"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Fill,
    pub on_activate: Option<Action>,
    /// Show a pointer cursor while hovered.
    pub hover_cursor: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    EaseIn,
    ElasticEaseOut,
}

impl Easing {
    /// Maps animation progress in `[0, 1]` to an interpolation factor.
    ///
    /// Progress outside the interval is clamped. The elastic curve overshoots
    /// past 1 before settling.
    pub fn apply(self, progress: f64) -> f64 {
        let p = progress.clamp(0.0, 1.0);
        match self {
            Self::Linear => p,
            Self::EaseIn => p * p,
            Self::ElasticEaseOut => {
                if p == 0.0 || p == 1.0 {
                    return p;
                }
                // period of 0.3 of the duration, starting a quarter period in
                2f64.powf(-10.0 * p) * ((p / 0.3 - 0.25) * TAU).sin() + 1.0
            }
        }
    }
}

/// Text style an animation ends at.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tween {
    pub easing: Easing,
    pub duration_ms: u32,
    pub opacity: f64,
    pub font_size: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub content: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub font_size: f64,
    pub opacity: f64,
    pub fill: Fill,
    pub align: Align,
    pub tween: Option<Tween>,
}

impl Text {
    pub fn line_count(&self) -> usize {
        self.content.split('\n').count()
    }

    /// Box height at the initial font size, one line per font size.
    pub fn height(&self) -> f64 {
        self.line_count() as f64 * self.font_size
    }

    /// Opacity and font size `elapsed_ms` after the text was added.
    pub fn style_at(&self, elapsed_ms: f64) -> (f64, f64) {
        let Some(tween) = self.tween else {
            return (self.opacity, self.font_size);
        };
        let progress = if tween.duration_ms == 0 {
            1.0
        } else {
            elapsed_ms / f64::from(tween.duration_ms)
        };
        let factor = tween.easing.apply(progress);
        let lerp = |from: f64, to: f64| from + (to - from) * factor;
        (
            lerp(self.opacity, tween.opacity),
            lerp(self.font_size, tween.font_size),
        )
    }

    pub fn is_animating(&self, elapsed_ms: f64) -> bool {
        self.tween
            .is_some_and(|tween| elapsed_ms < f64::from(tween.duration_ms))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Rect(Rect),
    Text(Text),
}

/// Scene graph operations the round controller relies on.
pub trait Renderer {
    fn add(&mut self, layer: Layer, node: Node);

    /// Destroys every node on `layer` and drops its activation handler.
    fn clear(&mut self, layer: Layer);

    /// Registers a handler for activations anywhere on `layer`.
    fn on_activate(&mut self, layer: Layer, action: Action);

    /// Flushes pending changes to the screen.
    fn draw(&mut self);
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LayerNodes {
    pub nodes: Vec<Node>,
    pub on_activate: Option<Action>,
}

impl LayerNodes {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.on_activate.is_none()
    }

    pub fn rects(&self) -> impl Iterator<Item = &Rect> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Rect(rect) => Some(rect),
            Node::Text(_) => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &Text> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Text(text) => Some(text),
            Node::Rect(_) => None,
        })
    }

    /// Longest running tween on this layer.
    pub fn animation_ms(&self) -> u32 {
        self.texts()
            .filter_map(|text| text.tween)
            .map(|tween| tween.duration_ms)
            .max()
            .unwrap_or(0)
    }
}

/// Retained scene, painted by the front-end after every commit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    width: f64,
    height: f64,
    layers: [LayerNodes; 3],
    commits: u64,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            layers: Default::default(),
            commits: 0,
        }
    }

    pub fn square(side: f64) -> Self {
        Self::new(side, side)
    }

    pub const fn width(&self) -> f64 {
        self.width
    }

    pub const fn height(&self) -> f64 {
        self.height
    }

    pub fn layer(&self, layer: Layer) -> &LayerNodes {
        &self.layers[layer.slot()]
    }

    /// Number of times the scene has been drawn.
    pub const fn commits(&self) -> u64 {
        self.commits
    }

    /// Topmost layer carrying any nodes.
    pub fn top_layer(&self) -> Option<Layer> {
        Layer::ALL
            .into_iter()
            .rev()
            .find(|&layer| !self.layer(layer).nodes.is_empty())
    }
}

impl Renderer for Scene {
    fn add(&mut self, layer: Layer, node: Node) {
        self.layers[layer.slot()].nodes.push(node);
    }

    fn clear(&mut self, layer: Layer) {
        self.layers[layer.slot()] = LayerNodes::default();
    }

    fn on_activate(&mut self, layer: Layer, action: Action) {
        self.layers[layer.slot()].on_activate = Some(action);
    }

    fn draw(&mut self) {
        self.commits += 1;
    }
}
