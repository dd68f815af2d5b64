use super::{Rect, Rgb, Surface};
use crate::{Car, Config};

/// Font size class for HUD strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    Large,
    Small,
}

/// A HUD string anchored at its top-left pixel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudText {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub color: Rgb,
    pub size: TextSize,
}

impl HudText {
    fn new(text: impl Into<String>, x: i32, y: i32, color: Rgb, size: TextSize) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            color,
            size,
        }
    }
}

/// Receives pre-formatted HUD strings
pub trait TextSink {
    fn draw_text(&mut self, text: &HudText);
}

pub const BOOST_BAR: Rect = Rect {
    x: 80,
    y: 52,
    w: 200,
    h: 20,
};

const CONTROLS_HELP: [&str; 3] = [
    "Arrow Keys: Steer/Throttle/Brake",
    "Space: Boost",
    "ESC: Quit",
];

/// `MM:SS.ss`
pub fn format_race_time(seconds: f32) -> String {
    let seconds = seconds.max(0.0);
    let minutes = (seconds / 60.0).floor() as u32;
    format!("{:02}:{:05.2}", minutes, seconds % 60.0)
}

/// All HUD strings for the current car state
pub fn hud_texts(car: &Car, config: &Config) -> Vec<HudText> {
    let width = config.screen_width as i32;
    let height = config.screen_height as i32;

    let (status, status_color) = if car.on_ground {
        ("ON GROUND", Rgb::GREEN)
    } else {
        ("AIRBORNE!", Rgb::YELLOW)
    };

    let mut texts = vec![
        HudText::new(
            format!("Speed: {:.1}", car.speed()),
            10,
            10,
            Rgb::GREEN,
            TextSize::Large,
        ),
        HudText::new("Boost:", 10, 50, Rgb::CYAN, TextSize::Small),
        HudText::new(
            format!("{:.0}%", car.boost_fraction(config) * 100.0),
            BOOST_BAR.x + BOOST_BAR.w + 10,
            50,
            Rgb::CYAN,
            TextSize::Small,
        ),
        HudText::new(
            format!("Time: {}", format_race_time(car.lap_time)),
            10,
            85,
            Rgb::WHITE,
            TextSize::Large,
        ),
        HudText::new(
            format!("Lap: {}", car.current_lap),
            10,
            125,
            Rgb::WHITE,
            TextSize::Small,
        ),
        HudText::new(status, 10, 150, status_color, TextSize::Small),
        HudText::new(
            "STUNT CAR RACER",
            width / 2 - 150,
            10,
            Rgb::RED,
            TextSize::Large,
        ),
    ];

    for (i, line) in CONTROLS_HELP.iter().enumerate() {
        texts.push(HudText::new(
            *line,
            width - 280,
            height - 80 + i as i32 * 25,
            Rgb::WHITE,
            TextSize::Small,
        ));
    }

    texts
}

/// Boost meter: white outline with a cyan fill proportional to the charge
pub fn draw_boost_bar<S: Surface>(surface: &mut S, car: &Car, config: &Config) {
    surface.draw_polygon(&BOOST_BAR.corners(), Rgb::WHITE, 1);

    let fill = (car.boost_fraction(config) * BOOST_BAR.w as f32) as i32;
    if fill > 0 {
        surface.draw_filled_rect(Rect { w: fill, ..BOOST_BAR }, Rgb::CYAN);
    }
}
