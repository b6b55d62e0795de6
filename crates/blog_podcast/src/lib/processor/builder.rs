use podcast_store::ArtifactStore;

use crate::{ContentScraper, Narrator, PodcastProcessor};

pub struct PodcastProcessorBuilder<S = (), N = (), A = ()> {
    scraper: S,
    narrator: N,
    store: A,
}

impl Default for PodcastProcessorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PodcastProcessorBuilder {
    pub fn new() -> Self {
        Self {
            scraper: (),
            narrator: (),
            store: (),
        }
    }
}

impl<S, N, A> PodcastProcessorBuilder<S, N, A> {
    pub fn scraper<S2: ContentScraper>(self, scraper: S2) -> PodcastProcessorBuilder<S2, N, A> {
        PodcastProcessorBuilder {
            scraper,
            narrator: self.narrator,
            store: self.store,
        }
    }

    pub fn narrator<N2: Narrator>(self, narrator: N2) -> PodcastProcessorBuilder<S, N2, A> {
        PodcastProcessorBuilder {
            scraper: self.scraper,
            narrator,
            store: self.store,
        }
    }

    pub fn store<A2: ArtifactStore>(self, store: A2) -> PodcastProcessorBuilder<S, N, A2> {
        PodcastProcessorBuilder {
            scraper: self.scraper,
            narrator: self.narrator,
            store,
        }
    }
}

impl<S, N, A> PodcastProcessorBuilder<S, N, A>
where
    S: ContentScraper,
    N: Narrator,
    A: ArtifactStore,
{
    pub fn build(self) -> PodcastProcessor<S, N, A> {
        PodcastProcessor {
            scraper: self.scraper,
            narrator: self.narrator,
            store: self.store,
        }
    }
}
