use crate::utils::*;
use chrono::prelude::*;
use clap::Args;
use gloo::timers::callback::Interval;
use oddtile_core as game;
use yew::prelude::*;

/// Repaint interval while an end screen animates.
const FRAME_MS: u32 = 16;

fn utc_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(js_now_ms() as i64).unwrap_or_default()
}

/// SVG `text-anchor` and anchor position for a text box.
fn text_anchor(text: &game::Text) -> (&'static str, f64) {
    use game::Align::*;
    match text.align {
        Left => ("start", text.x),
        Center => ("middle", text.x + text.width / 2.0),
        Right => ("end", text.x + text.width),
    }
}

/// Empty lines still need a glyph for `dy` to advance.
fn display_line(line: &str) -> &str {
    if line.is_empty() { "\u{a0}" } else { line }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Activate(game::Action),
    Hover(bool),
    Tick,
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Highest difficulty before the game is won
    #[arg(short, long)]
    pub ceiling: Option<game::Level>,

    #[arg(skip)]
    pub viewport_width: f64,
}

#[derive(Debug)]
pub(crate) struct GameView {
    controller: game::RoundController<game::Scene>,
    started_at: DateTime<Utc>,
    overlay_shown_at: Option<f64>,
    now_ms: f64,
    pointer_cursor: bool,
    animation: Option<Interval>,
}

impl GameView {
    fn config_for(props: &GameProps) -> game::GameConfig {
        let config = game::GameConfig::for_viewport(props.viewport_width);
        match props.ceiling {
            Some(ceiling) => config.with_ceiling(ceiling),
            None => config,
        }
    }

    fn create_animation(ctx: &Context<Self>) -> Interval {
        let link = ctx.link().clone();
        Interval::new(FRAME_MS, move || link.send_message(Msg::Tick))
    }

    fn overlay_elapsed(&self) -> f64 {
        self.overlay_shown_at
            .map_or(0.0, |shown_at| (self.now_ms - shown_at).max(0.0))
    }

    fn is_animating(&self) -> bool {
        let elapsed = self.overlay_elapsed();
        let scene = self.controller.renderer();
        [game::Layer::GameOver, game::Layer::Win]
            .into_iter()
            .flat_map(move |layer| scene.layer(layer).texts())
            .any(|text| text.is_animating(elapsed))
    }

    fn on_outcome(&mut self, ctx: &Context<Self>, outcome: game::ActivateOutcome) -> bool {
        if outcome.is_finish() {
            let secs = (utc_now() - self.started_at).num_seconds().max(0);
            log::info!(
                "session over after {}s: {:?}, score {}",
                secs,
                self.controller.phase(),
                self.controller.state().score()
            );
            let now = js_now_ms();
            self.now_ms = now;
            self.overlay_shown_at = Some(now);
            self.pointer_cursor = false;
            self.animation = Some(Self::create_animation(ctx));
        } else if outcome == game::ActivateOutcome::Restarted {
            self.started_at = utc_now();
            self.overlay_shown_at = None;
            self.animation = None;
        }
        outcome.has_update()
    }

    fn view_layer(&self, ctx: &Context<Self>, layer: game::Layer) -> Html {
        let nodes = self.controller.renderer().layer(layer);
        if nodes.nodes.is_empty() {
            return html! {};
        }

        let onmousedown = nodes
            .on_activate
            .map(|action| ctx.link().callback(move |_: MouseEvent| Msg::Activate(action)));
        let ontouchstart = nodes.on_activate.map(|action| {
            ctx.link().callback(move |e: TouchEvent| {
                e.prevent_default();
                Msg::Activate(action)
            })
        });
        let class = match layer {
            game::Layer::Level => "level",
            game::Layer::GameOver => "game-over",
            game::Layer::Win => "win",
        };

        html! {
            <g {class} {onmousedown} {ontouchstart}>
                { for nodes.nodes.iter().map(|node| self.view_node(ctx, node)) }
            </g>
        }
    }

    fn view_node(&self, ctx: &Context<Self>, node: &game::Node) -> Html {
        match node {
            game::Node::Rect(rect) => Self::view_rect(ctx, rect),
            game::Node::Text(text) => self.view_text(text),
        }
    }

    fn view_rect(ctx: &Context<Self>, rect: &game::Rect) -> Html {
        let onmousedown = rect
            .on_activate
            .map(|action| ctx.link().callback(move |_: MouseEvent| Msg::Activate(action)));
        // no emulated mouse event after touch, it would land on the next round
        let ontouchstart = rect.on_activate.map(|action| {
            ctx.link().callback(move |e: TouchEvent| {
                e.prevent_default();
                Msg::Activate(action)
            })
        });
        let (onmouseenter, onmouseleave) = if rect.hover_cursor {
            (
                Some(ctx.link().callback(|_: MouseEvent| Msg::Hover(true))),
                Some(ctx.link().callback(|_: MouseEvent| Msg::Hover(false))),
            )
        } else {
            (None, None)
        };

        html! {
            <rect
                x={rect.x.to_string()}
                y={rect.y.to_string()}
                width={rect.width.to_string()}
                height={rect.height.to_string()}
                fill={rect.fill.to_string()}
                {onmousedown}
                {ontouchstart}
                {onmouseenter}
                {onmouseleave}
            />
        }
    }

    fn view_text(&self, text: &game::Text) -> Html {
        let (opacity, font_size) = text.style_at(self.overlay_elapsed());
        let (anchor, anchor_x) = text_anchor(text);
        let anchor_x = anchor_x.to_string();
        let line_height = font_size.to_string();

        html! {
            <text
                y={text.y.to_string()}
                fill={text.fill.to_string()}
                opacity={opacity.to_string()}
                font-size={font_size.to_string()}
                text-anchor={anchor}
            >
                {
                    for text.content.split('\n').map(|line| html! {
                        <tspan x={anchor_x.clone()} dy={line_height.clone()}>
                            { display_line(line) }
                        </tspan>
                    })
                }
            </text>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let config = Self::config_for(props);
        let seed = props.seed.unwrap_or_else(js_random_seed);
        log::debug!("seed: {}, config: {:?}", seed, config);

        let scene = game::Scene::square(config.canvas_width);
        Self {
            controller: game::RoundController::new(config, seed, scene),
            started_at: utc_now(),
            overlay_shown_at: None,
            now_ms: js_now_ms(),
            pointer_cursor: false,
            animation: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Activate(action) => {
                log::trace!("activate: {:?}", action);
                match self.controller.dispatch(action) {
                    Ok(outcome) => self.on_outcome(ctx, outcome),
                    Err(err) => {
                        log::warn!("activation {:?} failed: {}", action, err);
                        false
                    }
                }
            }
            Hover(hovered) => {
                let hovered = hovered && self.controller.phase().is_playing();
                let changed = self.pointer_cursor != hovered;
                self.pointer_cursor = hovered;
                changed
            }
            Tick => {
                self.now_ms = js_now_ms();
                if !self.is_animating() {
                    self.animation = None;
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let scene = self.controller.renderer();
        let (width, height) = (scene.width().to_string(), scene.height().to_string());
        let view_box = format!("0 0 {} {}", width, height);
        let style = if self.pointer_cursor {
            "cursor: pointer"
        } else {
            "cursor: default"
        };

        html! {
            <div class="oddtile" {style}>
                <svg {width} {height} viewBox={view_box}>
                    { for game::Layer::ALL.into_iter().map(|layer| self.view_layer(ctx, layer)) }
                </svg>
            </div>
        }
    }
}
