use std::fs;
use std::path::PathBuf;

use lekcionaro::config::{Config, FILE_NAME};
use lekcionaro::error::{Error, LookupError, TextError};
use lekcionaro::lectionary::Lectionary;
use lekcionaro::liturgical::{LiturgicalYear, classify};
use lekcionaro::passage::{PassageSource, TextProvider};
use lekcionaro::psalter::Psalter;
use lekcionaro::{Date, Observance};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn lectionary() -> Lectionary {
    Lectionary::from_path(fixture("lectionary.json")).unwrap()
}

fn observance(y: i32, m: i32, d: i32) -> Observance {
    classify(Date::from_gregorian(y, m, d).unwrap()).unwrap()
}

#[test]
fn advent_readings_for_each_year() {
    let table = lectionary();

    let readings = table.resolve(&observance(2022, 11, 27)).unwrap();
    assert_eq!(
        vec!["Isa 2:1-5", "Ps 122", "Rom 13:8-14", "Matt 24:29-44"],
        readings.citations()
    );

    let readings = table.resolve(&observance(2023, 12, 3)).unwrap();
    assert!(readings.iter().any(|c| c == "Ps 80 or 80:1-7v"));
    assert_eq!("Ps 80", readings.first_options()[1]);

    let readings = table.resolve(&observance(2024, 12, 1)).unwrap();
    assert!(readings.iter().any(|c| c == "Zech 14:(1-2)3-9"));
}

#[test]
fn services_of_christmas_and_easter() {
    let table = lectionary();

    let christmas = observance(2024, 12, 25);
    assert_eq!("Christmas Day", christmas.name);
    assert_eq!("Isa 9:2-7", table.resolve(&christmas).unwrap().citations()[0]);
    assert_eq!(
        "John 1:1-18",
        table.resolve_service(&christmas, "III").unwrap().citations()[3]
    );
    assert_eq!(vec!["I", "III"], table.services("Christmas Day"));

    // Easter 2023 falls in Year A
    let easter = observance(2023, 4, 9);
    assert_eq!("Easter Day", easter.name);
    let readings = table.resolve(&easter).unwrap();
    assert_eq!("Acts 10:34-43", readings.first_options()[0]);
    assert_eq!("Jer 31:1-6", readings.options(1)[0]);
    assert_eq!("Ps 118:14-29", readings.options(1)[1]);
}

#[test]
fn gaps_in_the_table_are_errors() {
    let table = lectionary();
    assert_eq!(
        Err(LookupError::UnknownObservance {
            name: "Saint Nobody".into()
        }),
        table.resolve_named("Saint Nobody", LiturgicalYear::A, None)
    );
    // Proper 8 only has Year A in the fixture; 2025-06-29 is in Year C
    let proper = observance(2025, 6, 29);
    assert_eq!("Proper 8", proper.name);
    assert_eq!(
        Err(LookupError::MissingYear {
            name: "Proper 8".into(),
            year: LiturgicalYear::C
        }),
        table.resolve(&proper)
    );
}

#[test]
fn psalm_texts() {
    let psalter = Psalter::from_path(fixture("psalter.json")).unwrap();
    assert_eq!(2, psalter.len());

    let std = "Psalm 23

1 The LORD is my shepherd; *
therefore I can lack nothing.
3 He shall refresh my soul *
and bring me forth in the paths of righteousness for his Name's sake.
5 You shall prepare a table before me, in the presence of those who trouble me; *
you have anointed my head with oil, and my cup shall be full.";
    assert_eq!(std, psalter.get_psalm("Psalm 23:1,3,5").unwrap());

    let whole = psalter.get_psalm("Ps 23").unwrap();
    assert_eq!(whole, psalter.get_psalm("Ps 23:1(2-5)6").unwrap());
    assert_eq!(14, whole.lines().count());

    assert!(matches!(
        psalter.get_psalm("Ps 151:1-3"),
        Err(lekcionaro::error::InvalidReference::NoSuchPsalm(151))
    ));
    assert!(matches!(
        psalter.get_psalm("Ps 23:7"),
        Err(lekcionaro::error::InvalidReference::NoSuchVerse { chapter: 23, verse: 7 })
    ));
}

struct Echo;

impl TextProvider for Echo {
    fn fetch(&self, citation: &str) -> Result<String, TextError> {
        if citation.starts_with("Matt") {
            Ok(format!("[{citation}]"))
        } else {
            Err(TextError::NotFound(citation.to_owned()))
        }
    }
}

#[test]
fn texts_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join(FILE_NAME);
    fs::write(
        &config_path,
        format!(
            "[tables]\nlectionary = {:?}\npsalter = {:?}\n",
            fixture("lectionary.json"),
            fixture("psalter.json")
        ),
    )
    .unwrap();

    let config = Config::from_file(&config_path).unwrap();
    let table = config.load_lectionary().unwrap();
    let psalter = config.load_psalter().unwrap();
    assert!(psalter.is_some());

    let readings = table.resolve(&observance(2022, 11, 27)).unwrap();
    let source = PassageSource::new(Echo, psalter);

    let psalm = source.text(&readings.citations()[1]).unwrap();
    assert!(psalm.starts_with("Psalm 122\n\n1 I was glad when they said to me, *"));
    assert_eq!("[Matt 24:29-44]", source.text(&readings.citations()[3]).unwrap());

    // Isaiah is unknown to the provider, so the whole set fails
    assert!(matches!(
        source.texts(&readings),
        Err(Error::Text(TextError::NotFound(c))) if c == "Isa 2:1-5"
    ));
}
