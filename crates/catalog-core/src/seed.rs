//! The demo catalog: a small jazz discography used by the binaries and
//! the integration tests.

use crate::store::MemoryStore;
use crate::types::{Article, ArticleId, Author, AuthorId, Category, CategoryId};

pub const JAZZ: CategoryId = 1;
pub const FUSION: CategoryId = 2;
pub const BEBOP: CategoryId = 3;
pub const COOL: CategoryId = 4;

impl MemoryStore {
    /// A store pre-populated with the demo discography: 4 categories,
    /// 6 authors, 26 albums.
    #[must_use]
    pub fn seeded() -> Self {
        let mut store = MemoryStore::new();
        for (id, name) in [
            (JAZZ, "jazz"),
            (FUSION, "jazz fusion"),
            (BEBOP, "bebop"),
            (COOL, "cool jazz"),
        ] {
            store.add_category(Category { id, name: name.to_string() });
        }

        let mut next_article: ArticleId = 1;
        let mut seed = |store: &mut MemoryStore,
                        author_id: AuthorId,
                        author_name: &str,
                        albums: &[(&str, &[CategoryId])]| {
            let author = Author { id: author_id, name: author_name.to_string() };
            for (name, category_ids) in albums {
                store.add_article(
                    Article {
                        id: next_article,
                        name: (*name).to_string(),
                        author: author.clone(),
                    },
                    category_ids.to_vec(),
                );
                next_article += 1;
            }
        };

        seed(&mut store, 1, "Miles Davis", &[
            ("Bitches Brew", &[JAZZ, FUSION]),
            ("A Tribute to Jack Johnson", &[JAZZ, FUSION]),
            ("Miles In The Sky", &[JAZZ, FUSION]),
            ("Pangaea", &[JAZZ, FUSION]),
            ("Kind of Blue", &[JAZZ, COOL, BEBOP]),
            ("Sketches Of Spain", &[JAZZ, COOL, BEBOP]),
            ("Birth of the Cool", &[JAZZ, COOL, BEBOP]),
            ("Porgy And Bess", &[JAZZ, COOL, BEBOP]),
        ]);
        seed(&mut store, 2, "Sonny Rollins", &[
            ("Sonny Rollins With The Modern Jazz Quartet", &[JAZZ, COOL]),
            ("Next Album", &[JAZZ, FUSION]),
            ("Easy Living", &[JAZZ, FUSION]),
            ("The Way I Feel", &[JAZZ, FUSION]),
            ("Don't Stop the Carnival", &[JAZZ, FUSION]),
            ("Saxophone Colossus", &[JAZZ, BEBOP]),
            ("Plus Three", &[JAZZ, BEBOP]),
        ]);
        seed(&mut store, 3, "Chet Baker", &[
            ("Chet", &[JAZZ, COOL]),
            ("My Funny Valentine", &[JAZZ, COOL]),
        ]);
        seed(&mut store, 4, "Paul Desmond", &[
            ("Feeling Blue", &[JAZZ, COOL]),
            ("Bossa Antigua", &[JAZZ, COOL]),
            ("We're all together again", &[JAZZ, COOL]),
        ]);
        seed(&mut store, 5, "Dave Brubeck", &[
            ("Concord on a Summer Night", &[JAZZ, COOL]),
            ("Time Further Out", &[JAZZ, COOL]),
            ("Time Out", &[JAZZ, COOL]),
        ]);
        seed(&mut store, 6, "The Mahavishnu Orchestra", &[
            ("Birds Of Fire", &[JAZZ, FUSION]),
            ("Between Nothingness & Eternity", &[JAZZ, FUSION]),
            ("The Inner Mounting Flame", &[JAZZ, FUSION]),
        ]);

        store
    }
}
