pub mod english;
pub mod language;
pub mod renderer;
pub mod slovak;

pub use english::EnglishRenderer;
pub use language::{LanguageCode, VoiceSelection};
pub use renderer::{renderer_for, LocaleRenderer, RenderedItem};
pub use slovak::SlovakRenderer;
