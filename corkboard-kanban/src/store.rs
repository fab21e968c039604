//! BoardStore - the in-memory owner of all board data
//!
//! The store holds one collection per entity kind plus the acting user. It
//! provides lookups, identity generation and raw mutation primitives; the
//! rules that keep collections and ordering sequences consistent live in the
//! command modules (`board::DeleteBoard`, `card::MoveCard`, ...), which are
//! the only code that mutates a store.

use crate::config::StoreConfig;
use crate::error::{BoardError, Result};
use crate::events::{Observer, StoreEvent, SubscriptionId, Subscribers};
use crate::logging::Pretty;
use crate::processor::BoardOperationProcessor;
use crate::types::{
    Board, BoardId, Card, CardId, Comment, CommentId, EntityKind, EntityRef, List, ListId, User,
    UserId, Workspace, WorkspaceId,
};
use corkboard_operations::{Execute, LogEntry, OperationProcessor};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::VecDeque;
use std::hash::Hash;
use tracing::{debug, trace};

/// An owned, point-in-time copy of every collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub users: Vec<User>,
    pub workspaces: Vec<Workspace>,
    pub boards: Vec<Board>,
    pub lists: Vec<List>,
    pub cards: Vec<Card>,
    pub comments: Vec<Comment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_user: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_workspace: Option<WorkspaceId>,
}

/// The entity store. Construct one per application (or per test) and pass it
/// by reference to whatever needs it.
#[derive(Debug)]
pub struct BoardStore {
    config: StoreConfig,
    users: IndexMap<UserId, User>,
    workspaces: IndexMap<WorkspaceId, Workspace>,
    boards: IndexMap<BoardId, Board>,
    lists: IndexMap<ListId, List>,
    cards: IndexMap<CardId, Card>,
    comments: IndexMap<CommentId, Comment>,
    current_user: Option<UserId>,
    current_workspace: Option<WorkspaceId>,
    activity: VecDeque<LogEntry>,
    revision: u64,
    subscribers: Subscribers,
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

impl BoardStore {
    /// Create a store from `config`, seeding demo data if it asks for it
    pub fn new(config: StoreConfig) -> Self {
        let mut store = Self {
            config,
            users: IndexMap::new(),
            workspaces: IndexMap::new(),
            boards: IndexMap::new(),
            lists: IndexMap::new(),
            cards: IndexMap::new(),
            comments: IndexMap::new(),
            current_user: None,
            current_workspace: None,
            activity: VecDeque::new(),
            revision: 0,
            subscribers: Subscribers::default(),
        };

        debug!("store configuration: {}", Pretty(&store.config));
        if store.config.seed_demo_data {
            crate::seed::load_demo_data(&mut store);
        }

        if let Some(user) = store.config.default_user.clone() {
            if store.users.contains_key(&user) {
                store.current_user = Some(user);
            } else {
                debug!(user = %user, "configured default user does not exist, no acting user set");
            }
        }

        store
    }

    /// A store with no data and no acting user
    pub fn empty() -> Self {
        Self::new(StoreConfig::empty())
    }

    /// A store seeded with the demonstration data, acting as `user-1`
    pub fn with_demo_data() -> Self {
        Self::new(StoreConfig::default())
    }

    /// A store configured from `CORKBOARD_*` environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(StoreConfig::load()?))
    }

    /// The active configuration
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Run an operation through the default processor.
    ///
    /// The activity log entry is attributed to the acting user, and observers
    /// are notified if the operation changed anything.
    pub fn dispatch<O>(&mut self, op: &O) -> Result<Value>
    where
        O: Execute<BoardStore, BoardError>,
    {
        BoardOperationProcessor::default().process(op, self)
    }

    // =========================================================================
    // Identity
    // =========================================================================

    pub(crate) fn fresh_user_id(&self) -> UserId {
        fresh_id(&self.users, UserId::new)
    }

    pub(crate) fn fresh_workspace_id(&self) -> WorkspaceId {
        fresh_id(&self.workspaces, WorkspaceId::new)
    }

    pub(crate) fn fresh_board_id(&self) -> BoardId {
        fresh_id(&self.boards, BoardId::new)
    }

    pub(crate) fn fresh_list_id(&self) -> ListId {
        fresh_id(&self.lists, ListId::new)
    }

    pub(crate) fn fresh_card_id(&self) -> CardId {
        fresh_id(&self.cards, CardId::new)
    }

    pub(crate) fn fresh_comment_id(&self) -> CommentId {
        fresh_id(&self.comments, CommentId::new)
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    pub fn user(&self, id: &UserId) -> Option<&User> {
        self.users.get(id)
    }

    pub fn workspace(&self, id: &WorkspaceId) -> Option<&Workspace> {
        self.workspaces.get(id)
    }

    pub fn board(&self, id: &BoardId) -> Option<&Board> {
        self.boards.get(id)
    }

    pub fn list(&self, id: &ListId) -> Option<&List> {
        self.lists.get(id)
    }

    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.cards.get(id)
    }

    pub fn comment(&self, id: &CommentId) -> Option<&Comment> {
        self.comments.get(id)
    }

    /// Look up any entity by kind and raw id
    pub fn get(&self, kind: EntityKind, id: &str) -> Option<EntityRef<'_>> {
        match kind {
            EntityKind::User => self.users.get(id).map(EntityRef::User),
            EntityKind::Workspace => self.workspaces.get(id).map(EntityRef::Workspace),
            EntityKind::Board => self.boards.get(id).map(EntityRef::Board),
            EntityKind::List => self.lists.get(id).map(EntityRef::List),
            EntityKind::Card => self.cards.get(id).map(EntityRef::Card),
            EntityKind::Comment => self.comments.get(id).map(EntityRef::Comment),
        }
    }

    /// Whether an entity of `kind` with `id` exists
    pub fn contains(&self, kind: EntityKind, id: &str) -> bool {
        self.get(kind, id).is_some()
    }

    // =========================================================================
    // Collections
    // =========================================================================

    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    pub fn workspaces(&self) -> impl Iterator<Item = &Workspace> {
        self.workspaces.values()
    }

    pub fn boards(&self) -> impl Iterator<Item = &Board> {
        self.boards.values()
    }

    pub fn lists(&self) -> impl Iterator<Item = &List> {
        self.lists.values()
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    pub fn comments(&self) -> impl Iterator<Item = &Comment> {
        self.comments.values()
    }

    /// Number of entities of `kind`
    pub fn count(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::User => self.users.len(),
            EntityKind::Workspace => self.workspaces.len(),
            EntityKind::Board => self.boards.len(),
            EntityKind::List => self.lists.len(),
            EntityKind::Card => self.cards.len(),
            EntityKind::Comment => self.comments.len(),
        }
    }

    /// A board's lists in display order
    pub fn lists_of(&self, board: &BoardId) -> Vec<&List> {
        self.boards
            .get(board)
            .map(|b| b.list_ids.iter().filter_map(|id| self.lists.get(id)).collect())
            .unwrap_or_default()
    }

    /// A list's cards in display order
    pub fn cards_of(&self, list: &ListId) -> Vec<&Card> {
        self.lists
            .get(list)
            .map(|l| l.card_ids.iter().filter_map(|id| self.cards.get(id)).collect())
            .unwrap_or_default()
    }

    /// A card's comments, oldest first
    pub fn comments_of(&self, card: &CardId) -> Vec<&Comment> {
        self.comments
            .values()
            .filter(|c| &c.card_id == card)
            .collect()
    }

    /// A list's index in its board's list sequence
    pub fn list_position(&self, id: &ListId) -> Option<usize> {
        let list = self.lists.get(id)?;
        self.boards.get(&list.board_id)?.list_ids.position(id)
    }

    /// A card's index in its list's card sequence
    pub fn card_position(&self, id: &CardId) -> Option<usize> {
        let card = self.cards.get(id)?;
        self.lists.get(&card.list_id)?.card_ids.position(id)
    }

    /// The acting user, if one is set and still exists
    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref().and_then(|id| self.users.get(id))
    }

    /// The workspace the user is focused on, if one is set and still exists
    pub fn current_workspace(&self) -> Option<&Workspace> {
        self.current_workspace
            .as_ref()
            .and_then(|id| self.workspaces.get(id))
    }

    /// Owned copy of every collection
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            users: self.users.values().cloned().collect(),
            workspaces: self.workspaces.values().cloned().collect(),
            boards: self.boards.values().cloned().collect(),
            lists: self.lists.values().cloned().collect(),
            cards: self.cards.values().cloned().collect(),
            comments: self.comments.values().cloned().collect(),
            current_user: self.current_user.clone(),
            current_workspace: self.current_workspace.clone(),
        }
    }

    // =========================================================================
    // Activity log
    // =========================================================================

    /// Activity entries, newest first
    pub fn activity(&self) -> impl Iterator<Item = &LogEntry> {
        self.activity.iter()
    }

    /// Activity entries touching `id` (input or output mentions it), newest first
    pub fn activity_for<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a LogEntry> + 'a {
        self.activity
            .iter()
            .filter(move |entry| entry.mentions(id))
    }

    pub(crate) fn record_activity(&mut self, entry: LogEntry) {
        self.activity.push_front(entry);
        self.activity.truncate(self.config.activity_log_limit);
    }

    // =========================================================================
    // Change notification
    // =========================================================================

    /// Register an observer; it runs after every mutating operation
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: Fn(&BoardStore, &StoreEvent) + 'static,
    {
        let observer: Observer = Box::new(observer);
        self.subscribers.add(observer)
    }

    /// Remove an observer. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    /// Number of registered observers
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Number of mutations applied so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) fn notify(&mut self, op: String, affected: Vec<String>) {
        self.revision += 1;
        let event = StoreEvent {
            revision: self.revision,
            op,
            affected,
        };
        trace!(revision = event.revision, op = %event.op, observers = self.subscribers.len(), "notifying observers");
        for observer in self.subscribers.iter() {
            observer(self, &event);
        }
    }

    // =========================================================================
    // Mutation primitives (crate-internal)
    // =========================================================================

    pub(crate) fn set_current_user(&mut self, user: Option<UserId>) {
        self.current_user = user;
    }

    pub(crate) fn set_current_workspace(&mut self, workspace: Option<WorkspaceId>) {
        self.current_workspace = workspace;
    }

    pub(crate) fn insert_user(&mut self, user: User) {
        self.users.insert(user.id.clone(), user);
    }

    pub(crate) fn insert_workspace(&mut self, workspace: Workspace) {
        self.workspaces.insert(workspace.id.clone(), workspace);
    }

    pub(crate) fn insert_board(&mut self, board: Board) {
        self.boards.insert(board.id.clone(), board);
    }

    pub(crate) fn insert_list(&mut self, list: List) {
        self.lists.insert(list.id.clone(), list);
    }

    pub(crate) fn insert_card(&mut self, card: Card) {
        self.cards.insert(card.id.clone(), card);
    }

    pub(crate) fn insert_comment(&mut self, comment: Comment) {
        self.comments.insert(comment.id.clone(), comment);
    }

    pub(crate) fn workspace_mut(&mut self, id: &WorkspaceId) -> Option<&mut Workspace> {
        self.workspaces.get_mut(id)
    }

    pub(crate) fn board_mut(&mut self, id: &BoardId) -> Option<&mut Board> {
        self.boards.get_mut(id)
    }

    pub(crate) fn list_mut(&mut self, id: &ListId) -> Option<&mut List> {
        self.lists.get_mut(id)
    }

    pub(crate) fn card_mut(&mut self, id: &CardId) -> Option<&mut Card> {
        self.cards.get_mut(id)
    }

    pub(crate) fn remove_workspace(&mut self, id: &WorkspaceId) -> Option<Workspace> {
        if self.current_workspace.as_ref() == Some(id) {
            self.current_workspace = None;
        }
        self.workspaces.shift_remove(id)
    }

    pub(crate) fn remove_board(&mut self, id: &BoardId) -> Option<Board> {
        self.boards.shift_remove(id)
    }

    pub(crate) fn remove_list(&mut self, id: &ListId) -> Option<List> {
        self.lists.shift_remove(id)
    }

    pub(crate) fn remove_card(&mut self, id: &CardId) -> Option<Card> {
        self.cards.shift_remove(id)
    }

    pub(crate) fn remove_comment(&mut self, id: &CommentId) -> Option<Comment> {
        self.comments.shift_remove(id)
    }

    /// Remove every comment on `card`, returning how many were removed
    pub(crate) fn remove_comments_on(&mut self, card: &CardId) -> usize {
        let before = self.comments.len();
        self.comments.retain(|_, c| &c.card_id != card);
        before - self.comments.len()
    }

    // =========================================================================
    // Validation helpers
    // =========================================================================

    /// Apply the title rules: trim, blank becomes the placeholder, and the
    /// result must fit `max_title_length`.
    pub(crate) fn normalize_title(&self, field: &str, title: &str) -> Result<String> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Ok(self.config.untitled_placeholder.clone());
        }
        let length = trimmed.chars().count();
        if length > self.config.max_title_length {
            return Err(BoardError::invalid_value(
                field,
                format!(
                    "{} characters exceeds the limit of {}",
                    length, self.config.max_title_length
                ),
            ));
        }
        Ok(trimmed.to_string())
    }

    /// Resolve the acting user or fail with `NoActingUser`
    pub(crate) fn require_current_user(&self) -> Result<UserId> {
        self.current_user()
            .map(|u| u.id.clone())
            .ok_or(BoardError::NoActingUser)
    }
}

/// Generate ids until one is not a key of `map`
fn fresh_id<K, V>(map: &IndexMap<K, V>, generate: fn() -> K) -> K
where
    K: Hash + Eq,
{
    loop {
        let id = generate();
        if !map.contains_key(&id) {
            return id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store() {
        let store = BoardStore::empty();
        for kind in [
            EntityKind::User,
            EntityKind::Workspace,
            EntityKind::Board,
            EntityKind::List,
            EntityKind::Card,
            EntityKind::Comment,
        ] {
            assert_eq!(store.count(kind), 0, "{kind} should be empty");
        }
        assert!(store.current_user().is_none());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_from_env_applies_overrides() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("CORKBOARD_DEFAULT_USER", "user-2");
            jail.set_env("CORKBOARD_UNTITLED_PLACEHOLDER", "Nameless");

            let store = BoardStore::from_env().expect("store from env");
            assert_eq!(store.current_user().unwrap().id, "user-2");
            assert_eq!(store.config().untitled_placeholder, "Nameless");
            assert_eq!(store.count(EntityKind::Card), 5);

            jail.set_env("CORKBOARD_SEED_DEMO_DATA", "false");
            let store = BoardStore::from_env().expect("store from env");
            assert_eq!(store.count(EntityKind::Card), 0);
            // the configured user does not exist without seed data
            assert!(store.current_user().is_none());
            Ok(())
        });
    }

    #[test]
    fn test_demo_store_acts_as_user_one() {
        let store = BoardStore::with_demo_data();
        assert_eq!(store.current_user().unwrap().id, "user-1");
        assert!(store.contains(EntityKind::Board, "board-1"));
    }

    #[test]
    fn test_get_returns_none_for_missing() {
        let store = BoardStore::with_demo_data();
        assert!(store.get(EntityKind::Card, "nope").is_none());
        let found = store.get(EntityKind::Card, "card-1").unwrap();
        assert_eq!(found.kind(), EntityKind::Card);
        assert_eq!(found.id(), "card-1");
    }

    #[test]
    fn test_fresh_ids_are_unused() {
        let store = BoardStore::with_demo_data();
        let id = store.fresh_card_id();
        assert!(store.card(&id).is_none());
    }

    #[test]
    fn test_positions_follow_sequences() {
        let store = BoardStore::with_demo_data();
        assert_eq!(store.list_position(&ListId::from("list-2")), Some(1));
        assert_eq!(store.card_position(&CardId::from("card-2")), Some(1));
        assert_eq!(store.card_position(&CardId::from("missing")), None);
    }

    #[test]
    fn test_normalize_title() {
        let store = BoardStore::empty();
        assert_eq!(store.normalize_title("title", "  Plan  ").unwrap(), "Plan");
        assert_eq!(store.normalize_title("title", "   ").unwrap(), "Untitled");

        let long = "x".repeat(513);
        assert!(matches!(
            store.normalize_title("title", &long),
            Err(BoardError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_activity_log_is_bounded() {
        let mut store = BoardStore::new(StoreConfig {
            activity_log_limit: 2,
            ..StoreConfig::empty()
        });
        for i in 0..5 {
            store.record_activity(LogEntry::success(
                format!("op {i}"),
                Value::Null,
                Value::Null,
                0,
            ));
        }
        let ops: Vec<_> = store.activity().map(|e| e.op.as_str()).collect();
        assert_eq!(ops, ["op 4", "op 3"]);
    }
}
