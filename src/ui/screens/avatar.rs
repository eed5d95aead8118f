//! Avatar creation screen.
//!
//! Capture a photo (or fall back to the generated avatar), pick a name and tune
//! the sliders, then confirm to save everything and start playing.

use egui::{ColorImage, RichText, TextureHandle, TextureOptions, Ui, Vec2};
use image::RgbImage;

use crate::audio::{AudioManager, SoundEffect};
use crate::storage::save::{PlayerData, SaveError, SaveManager};
use crate::ui::theme::StormTheme;
use crate::world::avatar::{self, PhotoSource, CAPTURE_HEIGHT, CAPTURE_WIDTH, MAX_NAME_LEN};

/// Where the avatar screen wants to go next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarAction {
    /// Avatar saved; start playing
    Confirmed,
    /// Return to the main menu
    Back,
}

/// Avatar creation screen state.
pub struct AvatarCreationScreen {
    source: Box<dyn PhotoSource>,
    captured: Option<RgbImage>,
    from_source: bool,
    /// Name being typed
    pub name_input: String,
    pub skin_tone: f32,
    pub hair_style: f32,
    pub eye_color: f32,
    capture_texture: Option<TextureHandle>,
    preview_texture: Option<TextureHandle>,
    /// Skin tone the preview texture was built with
    preview_tone: Option<f32>,
    status_message: Option<(String, bool)>,
}

impl AvatarCreationScreen {
    /// Create the screen, prefilled from existing player data.
    pub fn new(source: Box<dyn PhotoSource>, data: &PlayerData) -> Self {
        Self {
            source,
            captured: None,
            from_source: false,
            name_input: data.player_name.clone(),
            skin_tone: data.skin_tone,
            hair_style: data.hair_style,
            eye_color: data.eye_color,
            capture_texture: None,
            preview_texture: None,
            preview_tone: None,
            status_message: None,
        }
    }

    /// Photo currently shown in the capture area
    pub fn captured(&self) -> Option<&RgbImage> {
        self.captured.as_ref()
    }

    /// Take a photo from the source, or generate one when it fails.
    pub fn take_photo(&mut self, audio: &AudioManager) {
        let (image, from_source) = avatar::capture_or_default(Some(self.source.as_mut()));
        audio.play_sfx(SoundEffect::CameraShutter);

        self.status_message = Some(if from_source {
            ("Photo captured".to_string(), false)
        } else {
            ("Using generated avatar".to_string(), false)
        });
        self.captured = Some(image);
        self.from_source = from_source;
        self.capture_texture = None;
        self.preview_texture = None;
        self.preview_tone = None;
    }

    /// Discard the current photo.
    pub fn retake(&mut self) {
        self.captured = None;
        self.from_source = false;
        self.capture_texture = None;
        self.preview_texture = None;
        self.preview_tone = None;
        self.status_message = None;
    }

    /// Write the avatar image and player data.
    ///
    /// A failed image write is logged and leaves `avatar_path` empty; the save
    /// file error is returned.
    pub fn confirm(&self, saves: &SaveManager, data: &mut PlayerData) -> Result<(), SaveError> {
        data.has_avatar = true;
        data.player_name = avatar::sanitize_name(&self.name_input);
        data.skin_tone = self.skin_tone;
        data.hair_style = self.hair_style;
        data.eye_color = self.eye_color;

        if let Some(image) = &self.captured {
            let path = saves.avatar_path();
            match avatar::save_avatar(image, &path) {
                Ok(()) => data.avatar_path = Some(path),
                Err(e) => {
                    tracing::warn!("Failed to save avatar image: {}", e);
                    data.avatar_path = None;
                }
            }
        }

        saves.save(data)?;
        tracing::info!("Avatar confirmed for {}", data.player_name);
        Ok(())
    }

    fn refresh_textures(&mut self, ctx: &egui::Context) {
        let Some(captured) = &self.captured else {
            return;
        };

        if self.capture_texture.is_none() {
            self.capture_texture = Some(load_rgb_texture(ctx, "avatar_capture", captured));
        }
        if self.preview_tone != Some(self.skin_tone) {
            let preview = avatar::avatar_preview(captured, self.skin_tone);
            self.preview_texture = Some(load_rgb_texture(ctx, "avatar_preview", &preview));
            self.preview_tone = Some(self.skin_tone);
        }
    }

    /// Render the screen and return the requested navigation.
    pub fn show(&mut self, ui: &mut Ui, audio: &AudioManager, saves: &SaveManager, data: &mut PlayerData) -> Option<AvatarAction> {
        self.refresh_textures(ui.ctx());
        let mut result = None;

        if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
            result = Some(AvatarAction::Back);
        }

        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.label(RichText::new("Create Your Avatar").size(40.0).strong());
            ui.add_space(16.0);

            let capture_size = Vec2::new(CAPTURE_WIDTH as f32, CAPTURE_HEIGHT as f32);
            match &self.capture_texture {
                Some(texture) => {
                    ui.image((texture.id(), capture_size));
                }
                None => {
                    let (rect, _) = ui.allocate_exact_size(capture_size, egui::Sense::hover());
                    ui.painter().rect_filled(rect, 0.0, StormTheme::CARD_BG);
                    ui.painter().text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        format!("Photo source: {}", self.source.name()),
                        egui::FontId::proportional(18.0),
                        StormTheme::TEXT_SECONDARY,
                    );
                }
            }

            ui.add_space(12.0);

            if self.captured.is_none() {
                if ui
                    .add_sized([200.0, 44.0], egui::Button::new(RichText::new("Take Photo").size(18.0)))
                    .clicked()
                {
                    self.take_photo(audio);
                }
            } else {
                self.show_customization(ui);

                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    ui.add_space((ui.available_width() - 416.0).max(0.0) / 2.0);
                    if ui
                        .add_sized([200.0, 44.0], egui::Button::new(RichText::new("Retake").size(18.0)))
                        .clicked()
                    {
                        audio.play_sfx(SoundEffect::ButtonClick);
                        self.retake();
                    }
                    ui.add_space(16.0);
                    if ui
                        .add_sized([200.0, 44.0], egui::Button::new(RichText::new("Confirm").size(18.0)))
                        .clicked()
                    {
                        audio.play_sfx(SoundEffect::ButtonClick);
                        if let Err(e) = self.confirm(saves, data) {
                            tracing::warn!("Failed to save player data: {}", e);
                        }
                        result = Some(AvatarAction::Confirmed);
                    }
                });
            }

            ui.add_space(12.0);
            if ui
                .add_sized([200.0, 36.0], egui::Button::new("Back"))
                .clicked()
            {
                audio.play_sfx(SoundEffect::ButtonClick);
                result = Some(AvatarAction::Back);
            }

            if let Some((message, is_error)) = &self.status_message {
                ui.add_space(8.0);
                let color = if *is_error {
                    StormTheme::ERROR
                } else {
                    StormTheme::TEXT_SECONDARY
                };
                ui.label(RichText::new(message).color(color));
            }
        });

        result
    }

    fn show_customization(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.add_space((ui.available_width() - 560.0).max(0.0) / 2.0);

            if let Some(texture) = &self.preview_texture {
                let side = avatar::AVATAR_SIZE as f32;
                ui.image((texture.id(), Vec2::splat(side)));
            }

            ui.add_space(24.0);
            ui.vertical(|ui| {
                ui.label("Name");
                ui.add(
                    egui::TextEdit::singleline(&mut self.name_input)
                        .char_limit(MAX_NAME_LEN)
                        .desired_width(240.0),
                );
                ui.add_space(8.0);
                ui.add(egui::Slider::new(&mut self.skin_tone, 0.0..=1.0).text("Skin tone"));
                ui.add(egui::Slider::new(&mut self.hair_style, 0.0..=1.0).text("Hair style"));
                ui.add(egui::Slider::new(&mut self.eye_color, 0.0..=1.0).text("Eye color"));
            });
        });
    }
}

fn load_rgb_texture(ctx: &egui::Context, name: &str, image: &RgbImage) -> TextureHandle {
    let size = [image.width() as usize, image.height() as usize];
    let color = ColorImage::from_rgb(size, image.as_raw());
    ctx.load_texture(name, color, TextureOptions::LINEAR)
}
