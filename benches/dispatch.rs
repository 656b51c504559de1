use criterion::{black_box, criterion_group, criterion_main, Criterion};
use virtual_gamepad::{GamepadController, Rect, RecordingRenderer, Tint, TouchKind};

fn pad() -> GamepadController {
    let mut pad = GamepadController::new(6, 2);
    for i in 0..6 {
        let x = 500.0 + (i % 3) as f32 * 70.0;
        let y = 300.0 + (i / 3) as f32 * 70.0;
        pad.configure_button(i, Rect::new(x, y, 60.0, 60.0), None, None);
    }
    pad.configure_joystick(0, Rect::new(100.0, 350.0, 40.0, 40.0), None, Rect::new(100.0, 350.0, 120.0, 120.0), None, 50.0);
    pad.configure_joystick(1, Rect::new(300.0, 350.0, 40.0, 40.0), None, Rect::new(300.0, 350.0, 120.0, 120.0), None, 50.0);
    pad
}

fn bench_dispatch(c: &mut Criterion) {
    c.bench_function("press_move_release", |b| {
        let mut pad = pad();
        b.iter(|| {
            pad.dispatch(black_box(110), black_box(360), TouchKind::Press, 0);
            for step in 0..16 {
                pad.dispatch(110 + step * 4, 360 - step * 2, TouchKind::Move, 0);
            }
            pad.dispatch(0, 0, TouchKind::Release, 0);
            black_box(pad.joystick_direction(0))
        })
    });

    c.bench_function("render", |b| {
        let pad = pad();
        let mut renderer = RecordingRenderer::new();
        b.iter(|| {
            pad.render(&mut renderer, Tint::WHITE);
            renderer.take_batches()
        })
    });
}

criterion_group!(benches, bench_dispatch);
criterion_main!(benches);
