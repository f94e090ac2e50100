use caristat::links::LinkKind;
use caristat::search::Searcher;
use common::{Config, PolitenessConfig, SiteConfig};

/// Config pointing at the mock server, with the politeness delay zeroed so
/// the statistics walk does not slow the suite down.
fn test_config(base_url: String) -> Config {
    Config {
        site: SiteConfig {
            base_url: Some(base_url),
            user_agent: Some("caristat-test/0.1".to_string()),
        },
        politeness: Some(PolitenessConfig {
            delay_ms: Some(0),
            fetch_timeout_seconds: Some(5),
            max_response_bytes: None,
        }),
        search: None,
    }
}

#[tokio::test]
async fn search_collects_and_labels_links_from_all_sources() {
    let mut server = mockito::Server::new_async().await;

    // Home page: one direct match, one non-match, one off-site link and one
    // document download. Only the first anchor should survive.
    let home = server
        .mock("GET", "/")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(
            r#"<html><body><nav>
                <a href="/subject/563">Kemiskinan</a>
                <a href="/publication">Publikasi</a>
                <a href="https://other.example/kemiskinan">Kemiskinan di situs lain</a>
                <a href="/unduh/laporan-kemiskinan.pdf">Laporan Kemiskinan (PDF)</a>
            </nav></body></html>"#,
        )
        .create_async()
        .await;

    // First statistics page: a direct match.
    let stats_table = server
        .mock("GET", "/statistics-table")
        .with_status(200)
        .with_body(r#"<a href="/statistics-table/subject-563">Data Garis Kemiskinan</a>"#)
        .create_async()
        .await;

    // Poverty subject page: a synonym match ("miskin") plus a duplicate of
    // the statistics-table link that must be deduplicated.
    let subject = server
        .mock("GET", "/subject/563")
        .with_status(200)
        .with_body(
            r#"
            <a href="/indicator/23">Persentase Penduduk Miskin</a>
            <a href="/statistics-table/subject-563">Garis Kemiskinan</a>
        "#,
        )
        .create_async()
        .await;

    // Publication page: a relative href without a leading slash, plus a
    // duplicate of the navigation hit.
    let publication = server
        .mock("GET", "/publication")
        .with_status(200)
        .with_body(
            r#"
            <a href="publikasi/profil-kemiskinan">Profil Kemiskinan Kota Medan 2023</a>
            <a href="/subject/563">Kemiskinan 2023</a>
        "#,
        )
        .create_async()
        .await;

    // The remaining subject pages are not mocked; mockito answers 501 and
    // the searcher must skip them.

    let config = test_config(server.url());
    let searcher = Searcher::new(&config).expect("searcher");
    let results = searcher.search_links("kemiskinan", 10).await;

    let base = server.url();
    let got: Vec<(&str, &str, LinkKind)> = results
        .iter()
        .map(|hit| (hit.title.as_str(), hit.url.as_str(), hit.kind))
        .collect();

    let expected: Vec<(String, String, LinkKind)> = vec![
        (
            "Kemiskinan".to_string(),
            format!("{}/subject/563", base),
            LinkKind::Navigation,
        ),
        (
            "Data Garis Kemiskinan".to_string(),
            format!("{}/statistics-table/subject-563", base),
            LinkKind::Statistics,
        ),
        (
            "Persentase Penduduk Miskin".to_string(),
            format!("{}/indicator/23", base),
            LinkKind::Statistics,
        ),
        (
            "Profil Kemiskinan Kota Medan 2023".to_string(),
            format!("{}/publikasi/profil-kemiskinan", base),
            LinkKind::Publication,
        ),
    ];
    let expected_refs: Vec<(&str, &str, LinkKind)> = expected
        .iter()
        .map(|(t, u, k)| (t.as_str(), u.as_str(), *k))
        .collect();

    assert_eq!(got, expected_refs);

    // Descriptions follow the per-source wording.
    assert_eq!(
        results[0].description,
        "Halaman Kemiskinan dari website BPS Kota Medan"
    );
    assert_eq!(
        results[1].description,
        "Data statistik kemiskinan dari BPS Kota Medan"
    );
    assert_eq!(
        results[3].description,
        "Publikasi mengenai kemiskinan dari BPS Kota Medan"
    );

    home.assert_async().await;
    stats_table.assert_async().await;
    subject.assert_async().await;
    publication.assert_async().await;
}

#[tokio::test]
async fn failing_pages_are_skipped_and_the_rest_still_answer() {
    let mut server = mockito::Server::new_async().await;

    // Home page errors out, publication page is missing; only one subject
    // page responds. The search must still return that page's hit.
    let _home = server
        .mock("GET", "/")
        .with_status(500)
        .create_async()
        .await;

    let economy = server
        .mock("GET", "/subject/52")
        .with_status(200)
        .with_body(r#"<a href="/indicator/pdrb">Pertumbuhan PDRB Medan</a>"#)
        .create_async()
        .await;

    let _publication = server
        .mock("GET", "/publication")
        .with_status(404)
        .create_async()
        .await;

    let config = test_config(server.url());
    let searcher = Searcher::new(&config).expect("searcher");
    let results = searcher.search_links("ekonomi", 10).await;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Pertumbuhan PDRB Medan");
    assert_eq!(results[0].kind, LinkKind::Statistics);
    assert_eq!(results[0].url, format!("{}/indicator/pdrb", server.url()));

    economy.assert_async().await;
}

#[tokio::test]
async fn no_matches_means_an_empty_result_set() {
    let mut server = mockito::Server::new_async().await;

    let _home = server
        .mock("GET", "/")
        .with_status(200)
        .with_body(r#"<a href="/subject/12">Penduduk</a>"#)
        .create_async()
        .await;

    let config = test_config(server.url());
    let searcher = Searcher::new(&config).expect("searcher");
    let results = searcher.search_links("pariwisata", 10).await;

    assert!(results.is_empty());
    assert_eq!(serde_json::to_string(&results).expect("serialize"), "[]");
}

#[tokio::test]
async fn result_cap_applies_across_sources() {
    let mut server = mockito::Server::new_async().await;

    let _home = server
        .mock("GET", "/")
        .with_status(200)
        .with_body(
            r#"
            <a href="/a">Penduduk Medan</a>
            <a href="/b">Sensus Penduduk</a>
            <a href="/c">Registrasi Penduduk</a>
        "#,
        )
        .create_async()
        .await;

    let _publication = server
        .mock("GET", "/publication")
        .with_status(200)
        .with_body(r#"<a href="/d">Proyeksi Penduduk</a>"#)
        .create_async()
        .await;

    let config = test_config(server.url());
    let searcher = Searcher::new(&config).expect("searcher");
    let results = searcher.search_links("penduduk", 2).await;

    let urls: Vec<_> = results.iter().map(|hit| hit.url.as_str()).collect();
    assert_eq!(
        urls,
        vec![
            format!("{}/a", server.url()).as_str(),
            format!("{}/b", server.url()).as_str(),
        ]
    );
}
