//! Support for library configuration options
//!
//! Every option can be overridden with an environment variable, read once on first use.

use std::path::PathBuf;

use csscolorparser::{Color, ParseColorError};
use once_cell::sync::Lazy;

use crate::task::Category;

/// Name of the key the task list is saved under (`STUDY_TRACKER_STORAGE_KEY`).
pub static STORAGE_KEY: Lazy<String> = Lazy::new(|| {
    std::env::var("STUDY_TRACKER_STORAGE_KEY").unwrap_or_else(|_| "study_tasks".to_string())
});

/// Folder used by the default [`Cache`](crate::cache::Cache) (`STUDY_TRACKER_CACHE_FOLDER`).
pub static CACHE_FOLDER: Lazy<PathBuf> = Lazy::new(|| {
    match std::env::var_os("STUDY_TRACKER_CACHE_FOLDER") {
        Some(folder) => PathBuf::from(folder),
        None => std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_default()
            .join(".config")
            .join("study-tracker"),
    }
});

/// Colours of the category dots (`STUDY_TRACKER_COLOR_HOMEWORK`, `STUDY_TRACKER_COLOR_PERSONAL_STUDY`...).
pub static PALETTE: Lazy<Palette> = Lazy::new(Palette::from_env);


/// The colour associated to each task category
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    homework: Color,
    exam: Color,
    project: Color,
    personal_study: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            homework: rgb(0xff, 0x8a, 0xa0),
            exam: rgb(0xc0, 0x99, 0xff),
            project: rgb(0x7f, 0xc7, 0xff),
            personal_study: rgb(0xff, 0xd8, 0x6b),
        }
    }
}

impl Palette {
    /// The default palette, with overrides taken from the environment.
    /// Invalid colours are logged and ignored
    pub fn from_env() -> Self {
        let mut palette = Self::default();
        for category in Category::ALL.iter() {
            let var = format!("STUDY_TRACKER_COLOR_{}", env_suffix(*category));
            if let Ok(value) = std::env::var(&var) {
                if let Err(err) = palette.set_color(*category, &value) {
                    log::warn!("Ignoring invalid colour {:?} in {}: {}", value, var, err);
                }
            }
        }
        palette
    }

    pub fn color_for(&self, category: Category) -> &Color {
        match category {
            Category::Homework => &self.homework,
            Category::Exam => &self.exam,
            Category::Project => &self.project,
            Category::PersonalStudy => &self.personal_study,
        }
    }

    /// Change the colour of a category. Accepts any CSS colour (`#7fc7ff`, `rebeccapurple`, `hsl(...)`...)
    pub fn set_color(&mut self, category: Category, css: &str) -> Result<(), ParseColorError> {
        let color = csscolorparser::parse(css)?;
        match category {
            Category::Homework => self.homework = color,
            Category::Exam => self.exam = color,
            Category::Project => self.project = color,
            Category::PersonalStudy => self.personal_study = color,
        }
        Ok(())
    }
}

fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::from_rgb_u8(r, g, b)
}

fn env_suffix(category: Category) -> &'static str {
    match category {
        Category::Homework => "HOMEWORK",
        Category::Exam => "EXAM",
        Category::Project => "PROJECT",
        Category::PersonalStudy => "PERSONAL_STUDY",
    }
}
