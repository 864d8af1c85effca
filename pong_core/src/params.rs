/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field (pixels, y grows downward)
    pub const FIELD_WIDTH: f32 = 1024.0;
    pub const FIELD_HEIGHT: f32 = 800.0;

    // Paddle
    pub const PADDLE_DISTANCE_FROM_SIDES: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 400.0; // units per second

    // Ball
    pub const SERVE_SPEED: f32 = 200.0; // horizontal speed and vertical draw radius
    pub const BALL_BOUNCE: f32 = 1.0; // fully elastic off the world bounds
    pub const DEFLECTION_FACTOR: f32 = 5.0; // vy gained per unit of off-centre contact

    // Scoreboard
    pub const SCORE_MARGIN_FROM_CENTER: f32 = 20.0;
    pub const SCORE_FONT: &'static str = "65px Arial";
    pub const SCORE_FILL: &'static str = "#878787";
}
