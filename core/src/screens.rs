use crate::*;

const MESSAGE_FONT_SIZE: f64 = 13.0;
const GLYPH_FONT_SIZE: f64 = 10.0;

const MESSAGE_TWEEN: Tween = Tween {
    easing: Easing::ElasticEaseOut,
    duration_ms: 700,
    opacity: 1.0,
    font_size: 20.0,
};

const GLYPH_TWEEN: Tween = Tween {
    easing: Easing::EaseIn,
    duration_ms: 400,
    opacity: 1.0,
    font_size: 50.0,
};

/// Full-canvas screen shown once a game ends.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EndScreen {
    GameOver { score: Level },
    Won,
}

impl EndScreen {
    pub const fn layer(self) -> Layer {
        match self {
            Self::GameOver { .. } => Layer::GameOver,
            Self::Won => Layer::Win,
        }
    }

    pub fn message(self) -> String {
        match self {
            Self::GameOver { score } => format!(
                "GAME OVER!\n\nYour score is: {score}\n\nCan you spot the odd one next time?\n\n(click to restart)\n"
            ),
            Self::Won => String::from(
                "YOU WON!\n\nAre you a magician? Well done!\n\nEvery odd tile found.\n\n(click to restart)\n",
            ),
        }
    }

    pub const fn glyph(self) -> &'static str {
        match self {
            Self::GameOver { .. } => "🤓",
            Self::Won => "🎉",
        }
    }

    /// Adds the screen to its own layer and makes the whole layer restart the game.
    pub fn render<R: Renderer>(self, renderer: &mut R, canvas_width: f64) {
        let layer = self.layer();
        let middle = canvas_width / 2.0;

        renderer.add(
            layer,
            Node::Rect(Rect {
                x: 0.0,
                y: 0.0,
                width: canvas_width,
                height: canvas_width,
                fill: Fill::Black,
                on_activate: None,
                hover_cursor: false,
            }),
        );

        let mut message = centered_text(self.message(), canvas_width, MESSAGE_FONT_SIZE);
        message.y = middle - message.height();
        message.tween = Some(MESSAGE_TWEEN);

        let mut glyph = centered_text(self.glyph().into(), canvas_width, GLYPH_FONT_SIZE);
        glyph.y = middle - glyph.height() + canvas_width / 4.0;
        glyph.tween = Some(GLYPH_TWEEN);

        renderer.add(layer, Node::Text(message));
        renderer.add(layer, Node::Text(glyph));
        renderer.on_activate(layer, Action::Restart);
        renderer.draw();
    }
}

fn centered_text(content: String, width: f64, font_size: f64) -> Text {
    Text {
        content,
        x: 0.0,
        y: 0.0,
        width,
        font_size,
        opacity: 0.0,
        fill: Fill::White,
        align: Align::Center,
        tween: None,
    }
}
