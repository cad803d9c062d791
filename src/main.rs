use arboard::Clipboard;
use macroquad::prelude::*;
use mapedit::action_log::{ActionLog, EditorAction};
use mapedit::config::EditorConfig;
use mapedit::persist;
use mapedit::{Brush, MapManager, CELL_SIZE_PX};
use std::collections::HashMap;

/// Generate the editor texture table
///
/// Tiles and markers are flat-color images; the path dot is the classic
/// 3x3 white point. All six required keys are present by construction.
fn build_textures() -> HashMap<&'static str, Texture2D> {
    let mut textures = HashMap::new();

    let tile = |color: Color| {
        Texture2D::from_image(&Image::gen_image_color(32, 32, color))
    };

    textures.insert("nonType", tile(Color::from_rgba(70, 70, 70, 255)));
    textures.insert("type1", tile(Color::from_rgba(90, 170, 80, 255)));
    textures.insert("type2", tile(Color::from_rgba(150, 110, 70, 255)));
    textures.insert(
        "start",
        Texture2D::from_image(&Image::gen_image_color(16, 16, Color::from_rgba(70, 110, 220, 255))),
    );
    textures.insert(
        "end",
        Texture2D::from_image(&Image::gen_image_color(16, 16, Color::from_rgba(220, 70, 70, 255))),
    );
    textures.insert(
        "dot",
        Texture2D::from_image(&Image::gen_image_color(3, 3, WHITE)),
    );

    textures
}

/// Editor state driving the render loop
struct EditorState {
    manager: MapManager,
    textures: HashMap<&'static str, Texture2D>,
    brush: Brush,
    cell_size: f32,
    map_path: String,
    background: Color,
    action_log: Option<ActionLog>,
}

impl EditorState {
    fn new(config: &EditorConfig) -> Self {
        let mut manager = MapManager::new(config.grid.cols, config.grid.rows);

        // Console listener on the notification channel
        manager.subscribe(Box::new(|event: &str, success: bool| {
            println!("Path event: {} (success: {})", event, success);
        }));

        let action_log = if config.logging.enable_action_log {
            Some(ActionLog::new())
        } else {
            None
        };

        EditorState {
            manager,
            textures: build_textures(),
            brush: Brush::Terrain,
            cell_size: config.grid.cell_size,
            map_path: config.files.map_path.clone(),
            background: Color::from_rgba(
                config.visual.background_r,
                config.visual.background_g,
                config.visual.background_b,
                255,
            ),
            action_log,
        }
    }

    fn texture(&self, key: &str) -> &Texture2D {
        self.textures
            .get(key)
            .unwrap_or_else(|| panic!("missing texture: {}", key))
    }

    fn log_action(&mut self, action: EditorAction) {
        if let Some(log) = &mut self.action_log {
            log.log_start(action.clone());
            log.log_finish(action);
        }
    }

    fn mouse_cell(&self) -> (i32, i32) {
        let (mouse_x, mouse_y) = mouse_position();
        ((mouse_x / self.cell_size) as i32, (mouse_y / self.cell_size) as i32)
    }

    fn handle_mouse(&mut self) {
        let (col, row) = self.mouse_cell();
        if !self.manager.grid().in_bounds(col, row) {
            return;
        }

        match self.brush {
            // Tile brushes paint continuously while the button is held
            Brush::Erase | Brush::Grass | Brush::Terrain => {
                if is_mouse_button_down(MouseButton::Left) {
                    let type_id = self.brush.type_id().unwrap_or(0);
                    self.manager.apply_brush(col, row, self.brush);
                    self.log_action(EditorAction::PaintTile { col, row, type_id });
                }
            }
            // Marker brushes fire once per click
            Brush::Start => {
                if is_mouse_button_pressed(MouseButton::Left) {
                    self.manager.apply_brush(col, row, self.brush);
                    self.log_action(EditorAction::PlaceStart { col, row });
                }
            }
            Brush::End => {
                if is_mouse_button_pressed(MouseButton::Left) {
                    self.manager.apply_brush(col, row, self.brush);
                    self.log_action(EditorAction::PlaceEnd { col, row });
                }
            }
        }
    }

    fn handle_keys(&mut self) {
        for (key, index) in [
            (KeyCode::Key0, 0),
            (KeyCode::Key1, 1),
            (KeyCode::Key2, 2),
            (KeyCode::Key3, 3),
            (KeyCode::Key4, 4),
        ] {
            if is_key_pressed(key) {
                if let Some(brush) = Brush::from_index(index) {
                    self.brush = brush;
                }
            }
        }

        // Fill the whole map with the current tile type
        if is_key_pressed(KeyCode::R) {
            let type_id = self.brush.type_id().unwrap_or(2);
            self.manager.fill(type_id, true);
            self.log_action(EditorAction::FillMap { type_id, replace_all: true });
        }
        // Fill only the still-empty tiles
        if is_key_pressed(KeyCode::F) {
            let type_id = self.brush.type_id().unwrap_or(2);
            self.manager.fill(type_id, false);
            self.log_action(EditorAction::FillMap { type_id, replace_all: false });
        }

        // Resize, keeping existing tiles
        let (mut cols, mut rows) = (self.manager.grid().cols(), self.manager.grid().rows());
        if is_key_pressed(KeyCode::Right) {
            cols += 1;
        }
        if is_key_pressed(KeyCode::Left) {
            cols = (cols - 1).max(1);
        }
        if is_key_pressed(KeyCode::Down) {
            rows += 1;
        }
        if is_key_pressed(KeyCode::Up) {
            rows = (rows - 1).max(1);
        }
        if cols != self.manager.grid().cols() || rows != self.manager.grid().rows() {
            self.manager.set_size(cols, rows);
            self.log_action(EditorAction::ResizeMap { cols, rows });
        }

        if is_key_pressed(KeyCode::S) {
            let path = self.map_path.clone();
            self.manager.save_file(&path);
            self.log_action(EditorAction::SaveMap);
            println!("Map saved to {}", path);
        }
        if is_key_pressed(KeyCode::L) {
            let path = self.map_path.clone();
            self.manager.load_file(&path);
            self.log_action(EditorAction::LoadMap);
            println!("Map loaded from {}", path);
        }

        if is_key_pressed(KeyCode::C) {
            self.copy_to_clipboard();
        }
    }

    fn copy_to_clipboard(&self) {
        let map_string =
            persist::write_map_string(self.manager.grid(), self.manager.path_points());
        match Clipboard::new() {
            Ok(mut clipboard) => {
                if let Err(e) = clipboard.set_text(&map_string) {
                    println!("Failed to copy to clipboard: {}", e);
                } else {
                    println!("Map copied to clipboard!");
                    // Keep clipboard alive for a moment to ensure clipboard managers can capture it
                    std::thread::sleep(std::time::Duration::from_millis(100));
                }
            }
            Err(e) => {
                println!("Failed to access clipboard: {}", e);
            }
        }
    }

    fn draw(&self) {
        clear_background(self.background);

        let grid = self.manager.grid();
        let size = self.cell_size;
        let tile_dest = Some(Vec2::new(size - 1.0, size - 1.0));

        for tile in grid.iter() {
            let px = tile.position.x * size;
            let py = tile.position.y * size;

            draw_texture_ex(
                self.texture(tile.texture_key),
                px,
                py,
                WHITE,
                DrawTextureParams {
                    dest_size: tile_dest,
                    ..Default::default()
                },
            );

            if let Some(decoration) = tile.decoration {
                let marker = size * 0.5;
                draw_texture_ex(
                    self.texture(decoration.texture_key()),
                    px + (size - marker) / 2.0,
                    py + (size - marker) / 2.0,
                    WHITE,
                    DrawTextureParams {
                        dest_size: Some(Vec2::new(marker, marker)),
                        ..Default::default()
                    },
                );
            }
        }

        // Path line dots, scaled from path space to screen space
        let scale = size / CELL_SIZE_PX;
        let dot = self.texture("dot");
        for point in self.manager.path_points() {
            let screen = point.scaled(scale);
            draw_texture(dot, screen.x, screen.y, WHITE);
        }

        // Brush preview follows the mouse
        let (mouse_x, mouse_y) = mouse_position();
        let preview_key = match self.brush {
            Brush::Erase => "nonType",
            Brush::Grass => "type1",
            Brush::Terrain => "type2",
            Brush::Start => "start",
            Brush::End => "end",
        };
        draw_texture_ex(
            self.texture(preview_key),
            mouse_x,
            mouse_y,
            Color::new(1.0, 1.0, 1.0, 0.7),
            DrawTextureParams {
                dest_size: Some(Vec2::new(size * 0.4, size * 0.4)),
                ..Default::default()
            },
        );

        let info = format!(
            "Brush: {:?}\nGrid: {}x{}\nPath points: {}\n0-4: select brush  F: fill empty  R: fill all\nArrows: resize  S: save  L: load  C: copy map\nEsc: quit",
            self.brush,
            grid.cols(),
            grid.rows(),
            self.manager.path_points().len()
        );
        draw_text(&info, 10.0, 20.0, 20.0, WHITE);
    }
}

fn window_conf() -> Conf {
    let config = EditorConfig::load();
    Conf {
        window_title: config.visual.window_title.clone(),
        window_width: (config.grid.cols as f32 * config.grid.cell_size) as i32,
        window_height: (config.grid.rows as f32 * config.grid.cell_size) as i32,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = EditorConfig::load();
    let mut state = EditorState::new(&config);

    loop {
        state.handle_mouse();
        state.handle_keys();

        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        state.draw();

        next_frame().await
    }

    if let Some(log) = &state.action_log {
        println!("{}", log.summary());
        if let Err(e) = log.save_to_file(&config.logging.action_log_path) {
            eprintln!("Warning: failed to save action log: {}", e);
        }
    }
}
