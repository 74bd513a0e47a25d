/// Image markers accepted in an avatar's metadata segment, checked in order.
const IMAGE_MARKERS: [(&str, &str); 4] = [
    ("jpeg", ".jpg"),
    ("jpg", ".jpg"),
    ("png", ".png"),
    ("gif", ".gif"),
];

/// Extension for an avatar, taken from the metadata part of its data-URL.
pub fn image_extension(metadata: &str) -> Option<&'static str> {
    IMAGE_MARKERS
        .iter()
        .find(|(marker, _)| metadata.contains(marker))
        .map(|(_, extension)| *extension)
}

/// Everything from the last `.` of a client file name, or `""` without one.
pub fn file_name_extension(name: &str) -> &str {
    name.rfind('.').map_or("", |dot| &name[dot..])
}
