/*
 * Copyright 2021 Constantin A. <emoji.builder@c1710.de>
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 */

use crate::tables::errors::SourceError;
use crate::tables::{ANNOTATIONS, EMOJI_TEST};

pub const LATEST: &str = "latest";
pub const DEFAULT_LOCALE: &str = "en";

const CLDR_ANNOTATIONS_BASE: &str =
    "https://raw.githubusercontent.com/unicode-org/cldr-json/main/cldr-json/cldr-annotations-full/annotations";

/// Formats an emoji version for the Unicode® download paths.
///
/// `0.0` stands for the latest version; everything else is rounded to one decimal place.
/// # Examples
/// ```
/// use emoji_catalog::tables::online::version_path;
///
/// assert_eq!(version_path(0.0), "latest");
/// assert_eq!(version_path(15.11), "15.1");
/// assert_eq!(version_path(15.15), "15.2");
/// assert_eq!(version_path(1.0), "1.0");
/// ```
pub fn version_path(version: f64) -> String {
    if version == 0.0 {
        String::from(LATEST)
    } else {
        format!("{:.1}", version)
    }
}

/// The URL of `emoji-test.txt` for the given emoji version (`0.0` for the latest one)
pub fn emoji_test_url(version: f64) -> String {
    format!("https://unicode.org/Public/emoji/{}/{}", version_path(version), EMOJI_TEST)
}

/// The URL of the full CLDR annotations for a locale (e.g. `en` or `de`)
pub fn annotations_url(locale: &str) -> String {
    format!("{}/{}/{}", CLDR_ANNOTATIONS_BASE, locale, ANNOTATIONS)
}

/// Downloads a file and fails on any non-success status.
pub fn fetch_text(client: &reqwest::blocking::Client, url: &str) -> Result<String, SourceError> {
    info!("Fetching {}", url);
    let response = client.get(url).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status {
            url: url.to_owned(),
            status: status.as_u16()
        });
    }
    Ok(response.text()?)
}
