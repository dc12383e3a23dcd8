//! End-to-end rendering of small scenes loaded from JSON.

use lux_core::{config_from_str, scene_graph_from_str, Color, Config, Shape};
use lux_renderer::{render, Camera, RenderSettings, Vec3, World};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn load(config: &str, graph: &str) -> (Config, World) {
    let config = config_from_str(config).unwrap();
    let graph = scene_graph_from_str(graph).unwrap();
    let world = World::bake(&graph, config.scene.clone()).unwrap();
    (config, world)
}

const SPHERE_CONFIG: &str = r#"{
    "max_depth": 4,
    "samples_per_pixel": 4,
    "seed": 7,
    "camera": {"resolution": [24, 16], "fov": 60.0, "position": [0, 0, 0]},
    "scene": {
        "background_color": [0.1, 0.2, 0.6],
        "materials": [
            {"name": "Red", "ambient": 0.1, "diffuse": 0.8, "specular": 0.3, "highlight": 20,
             "reflection": 0.2, "color": [1, 0, 0]},
            {"name": "floor", "ambient": 0.1, "diffuse": 0.9, "color": [0.8, 0.8, 0.8]}
        ],
        "lights": [
            {"type": "ambient", "intensity": [1, 1, 1]},
            {"type": "point", "intensity": [1, 1, 1], "position": [0, 5, 2]}
        ]
    }
}"#;

const SPHERE_GRAPH: &str = r#"{
    "transforms": ["translate 0 0 5"],
    "material": "floor",
    "nodes": [
        {"type": "node", "transforms": ["scale 2"], "material": "red", "nodes": [
            {"type": "leaf", "shapes": [{"type": "sphere", "position": [0, 0, 0], "radius": 1}]}
        ]},
        {"type": "leaf", "shapes": [{"type": "plane", "position": [0, -2, 0], "normal": [0, 1, 0]}]}
    ]
}"#;

#[test]
fn test_scene_file_composition() {
    init_logger();
    let (_, world) = load(SPHERE_CONFIG, SPHERE_GRAPH);

    assert_eq!(world.shapes().len(), 2);
    let Shape::Sphere(sphere) = world.shapes()[0].shape else {
        panic!("expected the sphere first");
    };
    assert!((sphere.position - Vec3::new(0.0, 0.0, 5.0)).length() < 1e-5);
    assert!((sphere.radius - 2.0).abs() < 1e-5);
    assert_eq!(world.shapes()[0].material, "red");
    assert_eq!(world.shapes()[1].material, "floor");
}

#[test]
fn test_fixed_seed_is_reproducible() {
    init_logger();
    let (config, world) = load(SPHERE_CONFIG, SPHERE_GRAPH);
    let camera = Camera::from_config(&config.camera);
    let settings = RenderSettings {
        bucket_size: 8,
        ..RenderSettings::from_config(&config)
    };

    let first = render(&camera, &world, &settings).unwrap();
    let second = render(&camera, &world, &settings).unwrap();

    assert_eq!(first.pixels, second.pixels);
    assert!(first.pixels.iter().all(|c| c.is_finite() && c.cmpge(Color::ZERO).all()));
}

#[test]
fn test_no_lights_no_features_shows_silhouette() {
    init_logger();
    let config = r#"{
        "shadows": false, "reflections": false, "refractions": false,
        "camera": {"resolution": [15, 15], "fov": 60.0},
        "scene": {
            "background_color": [0.25, 0.5, 0.75],
            "materials": [{"name": "white", "ambient": 1, "diffuse": 1}]
        }
    }"#;
    let graph = r#"{"material": "white", "nodes": [{"type": "leaf", "shapes": [
        {"type": "sphere", "position": [0, 0, 5], "radius": 1}
    ]}]}"#;
    let (config, world) = load(config, graph);
    let camera = Camera::from_config(&config.camera);
    let image = render(&camera, &world, &RenderSettings::from_config(&config)).unwrap();

    let background = Color::new(0.25, 0.5, 0.75);
    assert_eq!(image.get(7, 7), Color::ZERO);
    assert_eq!(image.get(0, 0), background);
    assert!(image.pixels.iter().all(|&c| c == Color::ZERO || c == background));
}

#[test]
fn test_mirror_reflects_background() {
    init_logger();
    let config = r#"{
        "shadows": false, "refractions": false, "max_depth": 1,
        "camera": {"resolution": [9, 9], "fov": 30.0, "position": [0, 1, 0], "direction": [0, -1, 1]},
        "scene": {
            "background_color": [0.0, 0.5, 1.0],
            "materials": [{"name": "mirror", "reflection": 1.0, "color": [0, 0, 0]}]
        }
    }"#;
    let graph = r#"{"material": "mirror", "nodes": [{"type": "leaf", "shapes": [
        {"type": "plane", "position": [0, 0, 0], "normal": [0, 1, 0]}
    ]}]}"#;
    let (config, world) = load(config, graph);
    let camera = Camera::from_config(&config.camera);
    let image = render(&camera, &world, &RenderSettings::from_config(&config)).unwrap();

    // Centre ray hits the mirror and bounces into the sky
    assert!((image.get(4, 4) - Color::new(0.0, 0.5, 1.0)).length() < 1e-5);
}

#[test]
fn test_demo_scene_loads_and_bakes() {
    init_logger();
    let scenes = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../scenes");
    let config = lux_core::load_config(scenes.join("config.json")).unwrap();
    let graph = lux_core::load_scene_graph(scenes.join("scene.json")).unwrap();

    let world = World::bake(&graph, config.scene.clone()).unwrap();
    assert_eq!(world.shapes().len(), 4);
    assert_eq!(world.lights().len(), 3);
}
