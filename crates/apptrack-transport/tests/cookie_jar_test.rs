use apptrack_core::constants::COOKIE_JAR_FILENAME;
use apptrack_transport::PersistentCookieJar;
use reqwest::cookie::CookieStore;
use reqwest::header::HeaderValue;
use reqwest::Url;

fn url() -> Url {
    Url::parse("https://collector.example.com/com.acme/tp2").unwrap()
}

#[test]
fn in_memory_jar_round_trips_through_cookie_store() {
    let jar = PersistentCookieJar::in_memory();
    let headers = [
        HeaderValue::from_static("sp=abc; Path=/"),
        HeaderValue::from_static("sid=42"),
    ];
    jar.set_cookies(&mut headers.iter(), &url());

    let cookie = jar.cookies(&url()).unwrap();
    assert_eq!(cookie.to_str().unwrap(), "sid=42; sp=abc");
    assert!(jar.path().is_none());
    assert_eq!(jar.len(), 2);
}

#[test]
fn cookies_are_scoped_to_host() {
    let jar = PersistentCookieJar::in_memory();
    jar.store("collector.example.com", ["sp=abc"]).unwrap();

    let other = Url::parse("https://elsewhere.example.com/").unwrap();
    assert!(jar.cookies(&other).is_none());
}

#[test]
fn zero_max_age_removes_cookie() {
    let jar = PersistentCookieJar::in_memory();
    jar.store("collector.example.com", ["sp=abc"]).unwrap();
    jar.store("collector.example.com", ["sp=; Max-Age=0"]).unwrap();
    assert!(jar.is_empty());
    assert!(jar.cookies(&url()).is_none());
}

#[test]
fn persisted_cookies_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    {
        let jar = PersistentCookieJar::open(dir.path()).unwrap();
        jar.store("collector.example.com", ["sp=abc", "sid=42"]).unwrap();
    }
    assert!(dir.path().join(COOKIE_JAR_FILENAME).exists());

    let reopened = PersistentCookieJar::open(dir.path()).unwrap();
    assert_eq!(reopened.get("collector.example.com", "sp").as_deref(), Some("abc"));
    assert_eq!(reopened.get("collector.example.com", "sid").as_deref(), Some("42"));
}

#[test]
fn clear_empties_disk_state() {
    let dir = tempfile::tempdir().unwrap();
    let jar = PersistentCookieJar::open(dir.path()).unwrap();
    jar.store("collector.example.com", ["sp=abc"]).unwrap();
    jar.clear().unwrap();

    let reopened = PersistentCookieJar::open(dir.path()).unwrap();
    assert!(reopened.is_empty());
}

#[test]
fn open_creates_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("app").join("cookies");
    let jar = PersistentCookieJar::open(&nested).unwrap();
    assert!(nested.is_dir());
    assert_eq!(jar.path(), Some(nested.join(COOKIE_JAR_FILENAME).as_path()));
}

#[test]
fn corrupt_jar_file_is_moved_aside_and_jar_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(COOKIE_JAR_FILENAME);
    std::fs::write(&path, "not json").unwrap();

    let jar = PersistentCookieJar::open(dir.path()).unwrap();
    assert!(jar.is_empty());
    let corrupt = path.with_extension("json.corrupt");
    assert_eq!(std::fs::read_to_string(corrupt).unwrap(), "not json");

    jar.store("c.example.com", ["sp=abc"]).unwrap();
    let reopened = PersistentCookieJar::open(dir.path()).unwrap();
    assert_eq!(reopened.get("c.example.com", "sp").as_deref(), Some("abc"));
}
