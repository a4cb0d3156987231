/*
 * Copyright 2019 Constantin A.
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
 */

#[macro_use]
extern crate log;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process::exit;

use clap::{App, Arg, ArgMatches};

use emoji_catalog::Catalog;
use emoji_catalog::sources::{load_catalog, DataSource};
use emoji_catalog::sources::fs_source::FsSource;
#[cfg(feature = "online")]
use emoji_catalog::sources::unicode_source::UnicodeSource;

fn app() -> App<'static, 'static> {
    let app = App::new("emoji_catalog")
        .about("Converts emoji-test.txt and the CLDR annotations into a JSON catalog")
        .arg(Arg::with_name("emoji_test")
            .long("emoji-test")
            .short("e")
            .value_name("FILE")
            .help("A local emoji-test.txt")
            .takes_value(true))
        .arg(Arg::with_name("annotations")
            .long("annotations")
            .short("a")
            .value_name("FILE")
            .help("A local CLDR annotations.json")
            .requires("emoji_test")
            .takes_value(true))
        .arg(Arg::with_name("output")
            .long("output")
            .short("o")
            .value_name("FILE")
            .help("Where to write the catalog (default: stdout)")
            .takes_value(true))
        .arg(Arg::with_name("pretty")
            .long("pretty")
            .help("Pretty-prints the JSON"));
    if cfg!(feature = "online") {
        app
            .arg(Arg::with_name("unicode_version")
                .long("unicode-version")
                .short("u")
                .value_name("VERSION")
                .help("The emoji version to download, e.g. 15.1 (0 for the latest one)")
                .conflicts_with("emoji_test")
                .takes_value(true))
            .arg(Arg::with_name("locale")
                .long("locale")
                .short("l")
                .value_name("LOCALE")
                .help("The CLDR locale for downloaded annotations (default: en)")
                .takes_value(true))
    } else {
        app
    }
}

fn source(matches: &ArgMatches) -> Result<Box<dyn DataSource>, String> {
    if let Some(emoji_test) = matches.value_of("emoji_test") {
        let annotations = matches.value_of("annotations").map(PathBuf::from);
        return Ok(Box::new(FsSource::new(PathBuf::from(emoji_test), annotations)));
    }
    online_source(matches)
}

#[cfg(feature = "online")]
fn online_source(matches: &ArgMatches) -> Result<Box<dyn DataSource>, String> {
    let version = match matches.value_of("unicode_version") {
        Some(version) => version.parse::<f64>()
            .map_err(|_| format!("Invalid emoji version: {}", version))?,
        None => 0.0
    };
    UnicodeSource::new(version, matches.value_of("locale"))
        .map(|source| Box::new(source) as Box<dyn DataSource>)
        .map_err(|error| error.to_string())
}

#[cfg(not(feature = "online"))]
fn online_source(_: &ArgMatches) -> Result<Box<dyn DataSource>, String> {
    Err(String::from("No emoji-test.txt given and online support is disabled"))
}

fn write_catalog(catalog: &Catalog, output: Option<&str>, pretty: bool) -> Result<(), String> {
    let writer: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path).map_err(|error| format!("{}: {}", path, error))?),
        None => Box::new(std::io::stdout())
    };
    let mut writer = BufWriter::new(writer);
    let result = if pretty {
        serde_json::to_writer_pretty(&mut writer, catalog)
    } else {
        serde_json::to_writer(&mut writer, catalog)
    };
    result.map_err(|error| error.to_string())?;
    writeln!(writer).and_then(|_| writer.flush())
        .map_err(|error| error.to_string())
}

fn run(matches: &ArgMatches) -> Result<(), String> {
    let source = source(matches)?;
    let catalog = load_catalog(&*source).map_err(|error| error.to_string())?;
    write_catalog(&catalog, matches.value_of("output"), matches.is_present("pretty"))
}

fn main() {
    env_logger::init();
    let matches = app().get_matches();

    if let Err(error) = run(&matches) {
        error!("{}", error);
        exit(1);
    }
}
