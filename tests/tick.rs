use bevy::prelude::*;
use bevy_simple_stats::prelude::*;

fn setup_app(config: StatsConfig) -> (App, Entity) {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(bevy_simple_stats::plugin)
        .insert_resource(config);

    let table = StatTable::new()
        .with("Health", StatDefinition::new(100.0, 0.0, 100.0, 0.0))
        .with("Stamina", StatDefinition::new(50.0, 0.0, 100.0, 5.0))
        .with("Hunger", StatDefinition::new(10.0, 0.0, 20.0, -4.0));
    let entity = app.world_mut().spawn(StatsInitializer::new(table)).id();
    (app, entity)
}

fn current(app: &App, entity: Entity, name: &str) -> f32 {
    app.world().get::<StatRegistry>(entity).unwrap().current_value(name).unwrap()
}

#[test]
fn test_one_tick_per_update() {
    let (mut app, entity) = setup_app(StatsConfig::default());

    app.update();
    assert_eq!(current(&app, entity, "Stamina"), 55.0);
    assert_eq!(current(&app, entity, "Health"), 100.0);
    assert_eq!(current(&app, entity, "Hunger"), 6.0);

    app.update();
    app.update();
    assert_eq!(current(&app, entity, "Stamina"), 65.0);
    // Saturates at the lower bound
    assert_eq!(current(&app, entity, "Hunger"), 0.0);
}

#[test]
fn test_ticks_saturate_at_max() {
    let (mut app, entity) = setup_app(StatsConfig::default());

    for _ in 0..20 {
        app.update();
    }
    assert_eq!(current(&app, entity, "Stamina"), 100.0);
}

#[test]
fn test_auto_tick_disabled() {
    let (mut app, entity) = setup_app(StatsConfig::new().with_auto_tick(false));

    app.update();
    app.update();
    assert_eq!(current(&app, entity, "Stamina"), 50.0);

    // Manual driving still works
    app.world_mut().get_mut::<StatRegistry>(entity).unwrap().tick();
    assert_eq!(current(&app, entity, "Stamina"), 55.0);
}

#[test]
fn test_print_stats_does_not_mutate() {
    let (mut app, entity) = setup_app(StatsConfig::new().with_auto_tick(false).with_print_stats(true));

    app.update();
    assert_eq!(current(&app, entity, "Stamina"), 50.0);
    assert_eq!(current(&app, entity, "Health"), 100.0);
}
