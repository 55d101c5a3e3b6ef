use crate::parser::{MediaFile, MEDIA_EXTENSION};
use crate::sanitize::sanitize_title;

/// Build the final file name from a base title and the file's flags.
///
/// Tags always come in the same order: MULTi, DTS, VO, Atmos, quality
/// (with HDR), h265. An empty base title still produces a name made of the
/// tags and the extension.
pub fn compose(base_title: &str, file: &MediaFile) -> String {
    let mut parts: Vec<String> = Vec::new();

    let base = sanitize_title(base_title);
    if !base.is_empty() {
        parts.push(base);
    }

    if file.multi {
        parts.push("[MULTi]".to_string());
    }

    if file.dts {
        parts.push("[DTS]".to_string());
    }

    if file.vo {
        parts.push("[VO]".to_string());
    }

    if file.atmos {
        parts.push("[Atmos]".to_string());
    }

    if let Some(quality) = file.quality {
        if file.hdr {
            parts.push(format!("[{} HDR]", quality));
        } else {
            parts.push(format!("[{}]", quality));
        }
    }

    if file.h265 {
        parts.push("[h265]".to_string());
    }

    format!("{}{}", parts.join(" "), MEDIA_EXTENSION)
}
