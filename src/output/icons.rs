//! Extension to icon lookup shared by the text and HTML renderers

/// Closed directory.
pub const DIR_ICON: &str = "📁";
/// Expanded directory (HTML only).
pub const DIR_OPEN_ICON: &str = "📂";
/// Fallback for unknown extensions.
pub const DEFAULT_FILE_ICON: &str = "📄";

const ICON_TABLE: &[(&str, &str)] = &[
    (".py", "🐍"),
    (".js", "📜"),
    (".html", "🌐"),
    (".css", "🎨"),
    (".jpg", "🖼️"),
    (".png", "🖼️"),
    (".gif", "🖼️"),
    (".svg", "🖼️"),
    (".mp4", "🎬"),
    (".avi", "🎬"),
    (".mkv", "🎬"),
    (".mov", "🎬"),
    (".mp3", "🎵"),
    (".wav", "🎵"),
    (".flac", "🎵"),
    (".ogg", "🎵"),
    (".pdf", "📄"),
    (".doc", "📝"),
    (".docx", "📝"),
    (".txt", "📄"),
    (".zip", "📦"),
    (".rar", "📦"),
    (".7z", "📦"),
    (".tar", "📦"),
    (".exe", "⚙️"),
    (".msi", "⚙️"),
    (".deb", "⚙️"),
    (".rpm", "⚙️"),
    (".json", "📋"),
    (".xml", "📋"),
    (".yml", "📋"),
    (".yaml", "📋"),
    (".md", "📖"),
    (".readme", "📖"),
];

/// Icon for a file extension (dot included, any case).
pub fn file_icon(extension: &str) -> &'static str {
    let extension = extension.to_lowercase();
    ICON_TABLE
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_FILE_ICON)
}
