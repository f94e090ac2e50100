//! Hand-curated BPS Kota Medan links.
//!
//! Serves as the fallback when the live search comes back empty and as the
//! only data source in offline mode. The table covers the six topics users
//! ask about most; everything else gets the default links (home page and
//! publication list).

use crate::links::{LinkKind, SearchHit};

struct CuratedLink {
    title: &'static str,
    url: &'static str,
    description: &'static str,
}

struct Topic {
    keyword: &'static str,
    links: &'static [CuratedLink],
}

const TOPICS: &[Topic] = &[
    Topic {
        keyword: "kemiskinan",
        links: &[
            CuratedLink {
                title: "Data Kemiskinan Kota Medan 2023",
                url: "https://medankota.bps.go.id/statistics-table/subject-563",
                description: "Statistik kemiskinan di Kota Medan tahun 2023",
            },
            CuratedLink {
                title: "Profil Kemiskinan Sumatera Utara",
                url: "https://medankota.bps.go.id/statistics/poverty-profile",
                description: "Profil kemiskinan Provinsi Sumatera Utara",
            },
        ],
    },
    Topic {
        keyword: "penduduk",
        links: &[
            CuratedLink {
                title: "Data Kependudukan Kota Medan 2023",
                url: "https://medankota.bps.go.id/statistics-table/subject-12",
                description: "Statistik kependudukan dan demografi Kota Medan",
            },
            CuratedLink {
                title: "Proyeksi Penduduk Kota Medan",
                url: "https://medankota.bps.go.id/statistics/population-projection",
                description: "Proyeksi jumlah penduduk Kota Medan 2020-2035",
            },
        ],
    },
    Topic {
        keyword: "ekonomi",
        links: &[
            CuratedLink {
                title: "PDRB Kota Medan 2023",
                url: "https://medankota.bps.go.id/statistics-table/subject-52",
                description: "Produk Domestik Regional Bruto Kota Medan",
            },
            CuratedLink {
                title: "Inflasi Kota Medan",
                url: "https://medankota.bps.go.id/statistics/inflation",
                description: "Data inflasi dan indeks harga konsumen Kota Medan",
            },
        ],
    },
    Topic {
        keyword: "industri",
        links: &[CuratedLink {
            title: "Statistik Industri Kota Medan",
            url: "https://medankota.bps.go.id/statistics-table/subject-15",
            description: "Data statistik industri manufaktur dan besar Kota Medan",
        }],
    },
    Topic {
        keyword: "pendidikan",
        links: &[CuratedLink {
            title: "Statistik Pendidikan Kota Medan",
            url: "https://medankota.bps.go.id/statistics-table/subject-28",
            description: "Data statistik pendidikan di Kota Medan",
        }],
    },
    Topic {
        keyword: "kesehatan",
        links: &[CuratedLink {
            title: "Statistik Kesehatan Kota Medan",
            url: "https://medankota.bps.go.id/statistics-table/subject-30",
            description: "Data statistik kesehatan dan fasilitas kesehatan Kota Medan",
        }],
    },
];

const DEFAULT_LINKS: &[CuratedLink] = &[
    CuratedLink {
        title: "BPS Kota Medan - Halaman Utama",
        url: "https://medankota.bps.go.id/",
        description: "Situs resmi Badan Pusat Statistik Kota Medan",
    },
    CuratedLink {
        title: "Publikasi BPS Kota Medan",
        url: "https://medankota.bps.go.id/publication",
        description: "Daftar publikasi dan laporan statistik BPS Kota Medan",
    },
];

fn to_hits(links: &[CuratedLink]) -> Vec<SearchHit> {
    links
        .iter()
        .map(|link| SearchHit {
            title: link.title.to_string(),
            url: link.url.to_string(),
            description: link.description.to_string(),
            kind: LinkKind::Curated,
        })
        .collect()
}

/// Curated links for a keyword. The topic lookup is deliberately loose:
/// the keyword may contain the topic name or the other way around, so
/// "data kemiskinan" and "eko" both land on a topic.
pub fn curated_for(keyword: &str) -> Option<Vec<SearchHit>> {
    let needle = keyword.to_lowercase();

    TOPICS
        .iter()
        .find(|topic| needle.contains(topic.keyword) || topic.keyword.contains(needle.as_str()))
        .map(|topic| to_hits(topic.links))
}

/// Links served when no curated topic matches the keyword.
pub fn default_links() -> Vec<SearchHit> {
    to_hits(DEFAULT_LINKS)
}
