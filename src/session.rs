//! The controller the rendering layer talks to.
//!
//! A [`Session`] owns the list and favorites stores and decides which load
//! results are allowed to land. Every load is tagged with a sequence number;
//! only a completion carrying the latest number is applied, so a slow early
//! request can never overwrite a newer result set.

use log::{debug, error, info};
use std::sync::Arc;

use crate::error::FinderError;
use crate::favorites::{FavoritesStore, ToggleOutcome};
use crate::list::RecipeListStore;
use crate::model::Recipe;
use crate::sources::{FeaturedCatalog, RecipeSource};
use crate::view::{DetailView, PageView, RecipeCard, ViewMode, ViewState};

pub const FEATURED_TITLE: &str = "All Featured Recipes";
pub const FAVORITES_TITLE: &str = "My Favorites";
/// Category tag that selects the featured listing.
pub const ALL_CATEGORY: &str = "all";

/// What a load asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadRequest {
    Featured,
    Search(String),
    Category(String),
}

/// Issued by `begin_*`, redeemed by [`Session::finish_load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    seq: u64,
    request: LoadRequest,
}

impl LoadTicket {
    pub fn request(&self) -> &LoadRequest {
        &self.request
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The result set was replaced with this many recipes
    Applied(usize),
    NotFound,
    Failed,
    /// A newer load was issued meanwhile; the response was dropped
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailTicket {
    seq: u64,
    id: String,
}

impl DetailTicket {
    pub fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailOutcome {
    Opened,
    NotFound,
    Failed,
    Stale,
}

/// Cheap handle that performs the network side of a ticket without
/// borrowing the session.
#[derive(Clone)]
pub struct Fetcher {
    source: Arc<dyn RecipeSource>,
    featured: Arc<FeaturedCatalog>,
}

impl Fetcher {
    pub async fn fetch(&self, request: &LoadRequest) -> Result<Vec<Recipe>, FinderError> {
        match request {
            LoadRequest::Featured => self.featured.load().await,
            LoadRequest::Search(query) | LoadRequest::Category(query) => {
                self.source.search(query).await
            }
        }
    }

    pub async fn lookup(&self, id: &str) -> Result<Recipe, FinderError> {
        self.source.lookup(id).await
    }
}

pub struct Session {
    source: Arc<dyn RecipeSource>,
    featured: Arc<FeaturedCatalog>,
    list: RecipeListStore,
    favorites: FavoritesStore,
    mode: ViewMode,
    state: ViewState,
    title: String,
    active_category: Option<String>,
    detail: Option<Recipe>,
    load_seq: u64,
    detail_seq: u64,
}

impl Session {
    pub fn new(
        source: Arc<dyn RecipeSource>,
        featured: FeaturedCatalog,
        list: RecipeListStore,
        favorites: FavoritesStore,
    ) -> Self {
        Self {
            source,
            featured: Arc::new(featured),
            list,
            favorites,
            mode: ViewMode::Browse,
            state: ViewState::Idle,
            title: String::new(),
            active_category: None,
            detail: None,
            load_seq: 0,
            detail_seq: 0,
        }
    }

    pub fn list(&self) -> &RecipeListStore {
        &self.list
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn active_category(&self) -> Option<&str> {
        self.active_category.as_deref()
    }

    pub fn fetcher(&self) -> Fetcher {
        Fetcher {
            source: self.source.clone(),
            featured: self.featured.clone(),
        }
    }

    pub fn begin_featured(&mut self) -> LoadTicket {
        self.active_category = Some(ALL_CATEGORY.to_string());
        self.begin(LoadRequest::Featured, FEATURED_TITLE.to_string())
    }

    /// Start a free-text search. Blank queries are ignored.
    pub fn begin_search(&mut self, query: &str) -> Option<LoadTicket> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        self.active_category = None;
        Some(self.begin(
            LoadRequest::Search(query.to_string()),
            format!("Results for \"{query}\"..."),
        ))
    }

    /// Start a category load. The `all` tag selects the featured listing.
    pub fn begin_category(&mut self, tag: &str) -> LoadTicket {
        let tag = tag.trim();
        if tag.eq_ignore_ascii_case(ALL_CATEGORY) {
            return self.begin_featured();
        }
        self.active_category = Some(tag.to_string());
        self.begin(
            LoadRequest::Category(tag.to_string()),
            format!("Results for \"{tag}\"..."),
        )
    }

    fn begin(&mut self, request: LoadRequest, title: String) -> LoadTicket {
        self.load_seq += 1;
        self.mode = ViewMode::Browse;
        self.state = ViewState::Loading;
        self.title = title;
        debug!("Load #{} started: {:?}", self.load_seq, request);
        LoadTicket {
            seq: self.load_seq,
            request,
        }
    }

    /// Apply the result of a load, unless a newer load was issued since.
    ///
    /// On a transport failure the previous result set stays in the store but
    /// the view shows nothing.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Recipe>, FinderError>,
    ) -> LoadOutcome {
        if ticket.seq != self.load_seq {
            debug!(
                "Discarding stale load #{} (latest is #{})",
                ticket.seq, self.load_seq
            );
            return LoadOutcome::Stale;
        }

        match result {
            Ok(recipes) => {
                let count = recipes.len();
                info!("Loaded {} recipes for {:?}", count, ticket.request);
                self.list.load(recipes);
                self.state = ViewState::Results;
                LoadOutcome::Applied(count)
            }
            Err(e) if e.is_not_found() => {
                info!("No recipes for {:?}", ticket.request);
                self.list.load(Vec::new());
                self.state = ViewState::NotFound;
                LoadOutcome::NotFound
            }
            Err(e) => {
                error!("Load {:?} failed: {}", ticket.request, e);
                self.state = ViewState::Failed;
                LoadOutcome::Failed
            }
        }
    }

    /// Fetch a ticket's request and apply the result.
    pub async fn run(&mut self, ticket: LoadTicket) -> LoadOutcome {
        let result = self.fetcher().fetch(&ticket.request).await;
        self.finish_load(ticket, result)
    }

    pub async fn show_featured(&mut self) -> LoadOutcome {
        let ticket = self.begin_featured();
        self.run(ticket).await
    }

    /// `None` when the query was blank and nothing happened.
    pub async fn search(&mut self, query: &str) -> Option<LoadOutcome> {
        let ticket = self.begin_search(query)?;
        Some(self.run(ticket).await)
    }

    pub async fn show_category(&mut self, tag: &str) -> LoadOutcome {
        let ticket = self.begin_category(tag);
        self.run(ticket).await
    }

    /// Switch the grid to the favorites projection.
    ///
    /// This counts as a load: anything still in flight becomes stale.
    pub fn show_favorites(&mut self) {
        self.load_seq += 1;
        self.mode = ViewMode::Favorites;
        self.title = FAVORITES_TITLE.to_string();
        self.active_category = None;
        self.list.load(self.favorites.all());
        self.state = self.projection_state();
    }

    fn projection_state(&self) -> ViewState {
        if self.list.is_empty() {
            ViewState::NotFound
        } else {
            ViewState::Results
        }
    }

    pub fn next_page(&mut self) {
        self.list.next();
    }

    pub fn prev_page(&mut self) {
        self.list.prev();
    }

    pub fn go_to_page(&mut self, n: usize) {
        self.list.go_to(n);
    }

    pub fn begin_detail(&mut self, id: &str) -> DetailTicket {
        self.detail_seq += 1;
        DetailTicket {
            seq: self.detail_seq,
            id: id.to_string(),
        }
    }

    pub fn finish_detail(
        &mut self,
        ticket: DetailTicket,
        result: Result<Recipe, FinderError>,
    ) -> DetailOutcome {
        if ticket.seq != self.detail_seq {
            debug!("Discarding stale detail for {}", ticket.id);
            return DetailOutcome::Stale;
        }
        match result {
            Ok(recipe) => {
                self.detail = Some(recipe);
                DetailOutcome::Opened
            }
            Err(e) if e.is_not_found() => {
                info!("Recipe {} not found", ticket.id);
                DetailOutcome::NotFound
            }
            Err(e) => {
                error!("Detail fetch for {} failed: {}", ticket.id, e);
                DetailOutcome::Failed
            }
        }
    }

    /// Look the recipe up and open it.
    pub async fn open_detail(&mut self, id: &str) -> DetailOutcome {
        let ticket = self.begin_detail(id);
        let result = self.fetcher().lookup(id).await;
        self.finish_detail(ticket, result)
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
        self.detail_seq += 1;
    }

    /// Toggle a favorite, taking the snapshot from the list or the open detail.
    ///
    /// With neither holding the recipe, an insert is [`ToggleOutcome::Ignored`].
    pub fn toggle_favorite(&mut self, id: &str) -> Result<ToggleOutcome, FinderError> {
        let candidate = self
            .list
            .find(id)
            .or_else(|| self.detail.as_ref().filter(|r| r.id == id));
        let outcome = self.favorites.toggle(id, candidate)?;

        if self.mode == ViewMode::Favorites && outcome != ToggleOutcome::Ignored {
            self.list.refresh(self.favorites.all());
            self.state = self.projection_state();
        }
        Ok(outcome)
    }

    pub fn view(&self) -> PageView {
        let (cards, pagination) = if self.state == ViewState::Results {
            let cards: Vec<RecipeCard> = self
                .list
                .page()
                .iter()
                .map(|r| RecipeCard::new(r, self.favorites.is_favorite(&r.id)))
                .collect();
            (cards, Some(self.list.pagination()))
        } else {
            (Vec::new(), None)
        };

        PageView {
            title: self.title.clone(),
            mode: self.mode,
            state: self.state,
            active_category: self.active_category.clone(),
            cards,
            pagination,
        }
    }

    pub fn detail_view(&self) -> Option<DetailView> {
        self.detail.as_ref().map(|recipe| DetailView {
            recipe: recipe.clone(),
            ingredient_lines: recipe.ingredient_lines(),
            favorite: self.favorites.is_favorite(&recipe.id),
        })
    }
}
