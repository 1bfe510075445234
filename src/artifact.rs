//! Fixed per-platform tables of release binaries to measure. Paths are
//! relative to the SDK repository root the CI job runs from.

use std::path::{Path, PathBuf};

use crate::record::Platform;

/// One entry to measure: the build variant name and the path of its binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub variant: String,
    pub path: PathBuf,
}

impl Artifact {
    pub fn new(variant: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            variant: variant.into(),
            path: path.into(),
        }
    }
}

/// The release binaries for a platform, resolved against `root`.
pub fn artifacts_for(platform: Platform, root: &Path) -> Vec<Artifact> {
    let table: &[(&str, &str)] = match platform {
        Platform::Android => &[
            (
                "aar",
                "platform/android/MapboxGLAndroidSDK/build/outputs/aar/MapboxGLAndroidSDK-release.aar",
            ),
            (
                "armv7",
                "platform/android/MapboxGLAndroidSDK/build/intermediates/intermediate-jars/release/jni/armeabi-v7a/libmapbox-gl.so",
            ),
            (
                "arm64_v8a",
                "platform/android/MapboxGLAndroidSDK/build/intermediates/intermediate-jars/release/jni/arm64-v8a/libmapbox-gl.so",
            ),
            (
                "x86",
                "platform/android/MapboxGLAndroidSDK/build/intermediates/intermediate-jars/release/jni/x86/libmapbox-gl.so",
            ),
            (
                "x86_64",
                "platform/android/MapboxGLAndroidSDK/build/intermediates/intermediate-jars/release/jni/x86_64/libmapbox-gl.so",
            ),
        ],
        Platform::Ios => &[
            ("universal", "build/ios/pkg/dynamic/Mapbox-stripped"),
            ("armv7", "build/ios/pkg/dynamic/Mapbox-stripped-armv7"),
            ("arm64", "build/ios/pkg/dynamic/Mapbox-stripped-arm64"),
            ("x86_64", "build/ios/pkg/dynamic/Mapbox-stripped-x86_64"),
        ],
    };

    table
        .iter()
        .map(|(variant, path)| Artifact::new(*variant, root.join(path)))
        .collect()
}
