use flare::rotation_clamp;
use flare::Application;
use flare::ApplicationState;
use flare::Button;
use flare::Canvas;
use flare::Color;
use flare::DVector2;
use flare::EmissionBehavior;
use flare::EmitterConfig;
use flare::Event;
use flare::Input;
use flare::JitteredKinematics;
use flare::KeyCode;
use flare::Kinematics;
use flare::Level;
use flare::ParticleEmitter;
use flare::Random;
use flare::Rect;
use flare::Rotation;
use flare::StreakStyle;
use flare::TextureId;
use glam::IVec2;

const SPAWN_COUNT: usize = 10;
const ANGLE_STEP: f64 = 15.0;
const SCROLL_SPEED: f64 = 4.0;

/// Counts draw calls instead of rasterizing them.
struct CountingCanvas {
    viewport: Rect,
    textures: u32,
    lines: usize,
    blits: usize,
}

impl CountingCanvas {
    fn new(viewport: Rect) -> Self {
        Self {
            viewport,
            textures: 0,
            lines: 0,
            blits: 0,
        }
    }
}

impl Canvas for CountingCanvas {
    fn viewport(&self) -> Rect {
        self.viewport
    }

    fn create_texture(&mut self, _size: IVec2) -> TextureId {
        self.textures += 1;
        TextureId(self.textures - 1)
    }

    fn set_render_target(&mut self, _target: Option<TextureId>) {}

    fn blit_texture(&mut self, _texture: TextureId, _dest: Rect, _rotation: Option<Rotation>) {
        self.blits += 1;
    }

    fn draw_line(&mut self, _from: IVec2, _to: IVec2, _color: Color, _thickness: u32) {
        self.lines += 1;
    }
}

struct Playground {
    state: ApplicationState,
    title: String,
    level: Level,
    emitter: ParticleEmitter,
    button: Button,
    canvas: CountingCanvas,
    angle: f64,
    frame: u64,
}

impl Playground {
    fn new() -> Self {
        let kinematics = JitteredKinematics::new(
            Kinematics::new(
                DVector2::zero(),
                DVector2::new(2.0, 0.0),
                DVector2::new(0.0, 0.01),
            ),
            0.5,
            Random::from_entropy(),
        );
        let config = EmitterConfig::with_capacity(256).with_life_span(3.0);
        let level = Level::new();
        let mut emitter = ParticleEmitter::new(
            DVector2::new(400.0, 300.0),
            config,
            StreakStyle::default(),
        )
        .with_kinematics(kinematics);
        emitter.use_scroll(level.scroll_handle());

        Self {
            state: ApplicationState::Running,
            title: "Flare Playground".to_string(),
            level,
            emitter,
            button: Button::new(Rect::new(20, 20, 80, 30)),
            canvas: CountingCanvas::new(Rect::new(0, 0, 800, 600)),
            angle: 0.0,
            frame: 0,
        }
    }

    fn cycle_behavior(&mut self) {
        let behavior = match self.emitter.behavior() {
            EmissionBehavior::Linear => EmissionBehavior::Spread,
            EmissionBehavior::Spread => EmissionBehavior::Alternating,
            EmissionBehavior::Alternating => EmissionBehavior::Linear,
        };

        self.emitter.set_behavior(behavior);
        log::info!("emission behavior: {behavior:?}");
    }
}

impl Application for Playground {
    fn title(&self) -> &str {
        &self.title
    }

    fn state(&self) -> ApplicationState {
        self.state
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::CloseRequested | Event::KeyPressed(KeyCode::Escape) => {
                self.state = ApplicationState::Finished;
            }
            Event::KeyPressed(KeyCode::Space) => {
                let spawned = self.emitter.spawn_particles(SPAWN_COUNT);
                log::debug!("spawned {spawned} particles");
            }
            Event::KeyPressed(KeyCode::Tab) => self.cycle_behavior(),
            _ => {}
        }
    }

    fn update(&mut self, input: &Input) {
        let was_pressed = self.button.is_pressed();
        if self.button.is_clicked(input) && !was_pressed {
            self.angle = rotation_clamp(self.angle + ANGLE_STEP, 0.0, 360.0);
            self.emitter.set_emission_angle(self.angle);
            log::info!("emission angle: {:.0}", self.angle);
        }

        let mut scroll = DVector2::zero();
        for (key, direction) in [
            (KeyCode::ArrowLeft, DVector2::new(-1.0, 0.0)),
            (KeyCode::ArrowRight, DVector2::new(1.0, 0.0)),
            (KeyCode::ArrowUp, DVector2::new(0.0, -1.0)),
            (KeyCode::ArrowDown, DVector2::new(0.0, 1.0)),
        ] {
            if input.is_pressed(key) {
                scroll += direction.scaled(SCROLL_SPEED);
            }
        }
        if !scroll.is_zero() {
            self.level.scroll_by(scroll);
        }

        self.emitter.update();

        self.canvas.draw_quad(self.button.quad(), Color::WHITE, 1);
        let drawn = self.emitter.draw(&mut self.canvas);

        self.frame += 1;
        if self.frame % 120 == 0 {
            log::debug!(
                "frame {}: {drawn} particles drawn, {} lines and {} blits so far",
                self.frame,
                self.canvas.lines,
                self.canvas.blits
            );
        }

        self.title = format!(
            "Flare Playground ({} particles)",
            self.emitter.alive_particles()
        );
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(error) = Playground::new().run() {
        log::error!("playground failed: {error}");
    }
}
