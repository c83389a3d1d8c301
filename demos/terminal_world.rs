use crossterm::{
    cursor::{Hide, MoveTo, Show},
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{size, Clear, ClearType},
    ExecutableCommand, QueueableCommand,
};
use folio_physics::{
    core::{
        launch_velocity, BlockColumn, FrameClock, ImpactVolume, SectionId, SystemTimeSource,
        WorldLayout,
    },
    ColliderRect, PhysicsWorld, Vector2, WorldEvent,
};
use std::io::{stdout, Write};
use std::thread::sleep;
use std::time::{Duration, Instant};

const FRAME_DURATION: Duration = Duration::from_millis(16);
const SIMULATION_DURATION: f32 = 20.0; // seconds

// World pixels per terminal cell
const CELL_WIDTH: f32 = 12.0;
const CELL_HEIGHT: f32 = 24.0;

const VIEWPORT_WIDTH: f32 = 1280.0;
const VIEWPORT_HEIGHT: f32 = 720.0;
const BALL_RADIUS: f32 = 18.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut stdout = stdout();
    stdout.execute(Hide)?;
    let (width, height) = size()?;

    let layout = WorldLayout::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT);
    let floor = layout.world_bounds().floor();

    // One card per regular section, standing on the floor
    let colliders: Vec<ColliderRect> = SectionId::ORDER
        .iter()
        .filter(|section| !section.is_compact() && **section != SectionId::Intro)
        .map(|section| {
            let x = layout.section_x(*section);
            ColliderRect::new(x + 200.0, x + 500.0, floor - 160.0, floor)
        })
        .collect();

    let mut world = PhysicsWorld::new(layout.start_position(), BALL_RADIUS, layout.world_bounds(), colliders)?;
    let mut columns = vec![
        BlockColumn::new(
            "languages",
            layout.section_x(SectionId::Languages) + 300.0,
            ["rust", "typescript", "python", "go"],
        )
        .with_section_width(layout.section_width(SectionId::Languages)),
        BlockColumn::new(
            "tools",
            layout.section_x(SectionId::Tools) + 300.0,
            ["git", "docker", "linux"],
        )
        .with_section_width(layout.section_width(SectionId::Tools)),
    ];
    let mut rng = rand::thread_rng();
    let mut camera = layout.camera(world.get_config().camera_lerp);
    let mut volume = ImpactVolume::default();
    let mut clock = FrameClock::new(
        SystemTimeSource::new(),
        world.get_config().frame_duration_ms,
        world.get_config().max_frame_delta,
    );

    // A long drag to the left flings the ball right
    let max_speed = world.get_config().max_launch_speed;
    let velocity = launch_velocity(Vector2::new(0.0, 0.0), Vector2::new(-160.0, 60.0), max_speed);
    world.set_velocity(velocity.x, velocity.y);

    let start_time = Instant::now();
    let mut last_volume = 0.0;

    while start_time.elapsed().as_secs_f32() < SIMULATION_DURATION {
        world.update(clock.tick());

        for column in &mut columns {
            column.spawn_when_visible(&mut world, &mut rng)?;
        }
        for event in world.drain_events() {
            if let Some(played) = volume.observe(&event) {
                last_volume = played;
            }
            if let WorldEvent::BlockHit { block, side } = &event {
                log::info!("ball hit {} on {:?}", block, side);
            }
        }

        // Relaunch once the ball has come to rest
        if !world.is_launched() && world.ball().get_velocity().is_zero() {
            world.set_velocity(velocity.x, velocity.y);
        }

        let camera_x = camera.follow(world.ball().get_position().x);
        let center_x = layout.viewport_center_x();
        let to_cell = |p: Vector2| -> Option<(u16, u16)> {
            let x = (camera.world_to_screen_x(p.x, center_x) / CELL_WIDTH).round();
            let y = (p.y / CELL_HEIGHT).round();
            (x >= 0.0 && y >= 0.0 && x < width as f32 && y < height as f32 - 1.0)
                .then_some((x as u16, y as u16))
        };

        stdout.queue(Clear(ClearType::All))?;

        for rect in world.colliders() {
            for p in [
                Vector2::new(rect.left_x, rect.top_y),
                Vector2::new(rect.right_x, rect.top_y),
            ] {
                if let Some((x, y)) = to_cell(p) {
                    stdout.queue(MoveTo(x, y))?.queue(Print('+'))?;
                }
            }
        }

        for block in world.blocks() {
            if let Some((x, y)) = to_cell(block.get_position()) {
                let glyph = block.get_label().and_then(|l| l.chars().next()).unwrap_or('#');
                stdout
                    .queue(MoveTo(x, y))?
                    .queue(SetForegroundColor(Color::Yellow))?
                    .queue(Print(glyph))?
                    .queue(ResetColor)?;
            }
        }

        if let Some((x, y)) = to_cell(world.ball().get_position()) {
            stdout
                .queue(MoveTo(x, y))?
                .queue(SetForegroundColor(Color::Red))?
                .queue(Print('●'))?
                .queue(ResetColor)?;
        }

        let floor_row = ((floor / CELL_HEIGHT).round() as u16).min(height.saturating_sub(2));
        stdout
            .queue(MoveTo(0, floor_row))?
            .queue(Print("=".repeat(width as usize)))?;

        stdout
            .queue(MoveTo(0, height.saturating_sub(1)))?
            .queue(Print(format!(
                "camera {:>7.1}  ball {}  blocks {}  last bounce volume {:.2}",
                camera_x,
                world.ball().get_position(),
                world.blocks().len(),
                last_volume
            )))?;
        stdout.flush()?;

        sleep(FRAME_DURATION);
    }

    stdout.execute(Show)?;
    stdout.execute(Clear(ClearType::All))?;
    Ok(())
}
