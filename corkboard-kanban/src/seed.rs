//! Demonstration data loaded into new stores.
//!
//! Two workspaces, two boards, four lists, five cards, three users and no
//! comments. Ids are fixed so tests and demos can refer to them.

use crate::store::BoardStore;
use crate::types::{Board, Card, IdSet, List, User, UserId, Workspace};
use tracing::debug;

struct SeedUser {
    id: &'static str,
    name: &'static str,
    email: &'static str,
    avatar: &'static str,
}

const USERS: &[SeedUser] = &[
    SeedUser {
        id: "user-1",
        name: "John Doe",
        email: "john@example.com",
        avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=32&h=32&fit=crop&crop=face",
    },
    SeedUser {
        id: "user-2",
        name: "Jane Smith",
        email: "jane@example.com",
        avatar: "https://images.unsplash.com/photo-1494790108755-2616b6b1f4d?w=32&h=32&fit=crop&crop=face",
    },
    SeedUser {
        id: "user-3",
        name: "Bob Johnson",
        email: "bob@example.com",
        avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=32&h=32&fit=crop&crop=face",
    },
];

/// (workspace id, name, description, members)
const WORKSPACES: &[(&str, &str, &str, &[&str])] = &[
    (
        "workspace-1",
        "Engineering",
        "Product development",
        &["user-1", "user-2"],
    ),
    (
        "workspace-2",
        "Marketing",
        "Campaigns and outreach",
        &["user-2", "user-3"],
    ),
];

/// (board id, workspace id, title, description, members)
const BOARDS: &[(&str, &str, &str, &str, &[&str])] = &[
    (
        "board-1",
        "workspace-1",
        "Project Alpha",
        "Main project board",
        &["user-1", "user-2"],
    ),
    (
        "board-2",
        "workspace-2",
        "Marketing Campaign",
        "Q4 Marketing initiatives",
        &["user-2", "user-3"],
    ),
];

/// (list id, board id, title), in board order
const LISTS: &[(&str, &str, &str)] = &[
    ("list-1", "board-1", "To Do"),
    ("list-2", "board-1", "In Progress"),
    ("list-3", "board-1", "Done"),
    ("list-4", "board-2", "Ideas"),
];

/// (card id, list id, title, description, assignees), in list order
const CARDS: &[(&str, &str, &str, &str, &[&str])] = &[
    (
        "card-1",
        "list-1",
        "Setup project repository",
        "Initialize the project with proper folder structure",
        &["user-1"],
    ),
    (
        "card-2",
        "list-1",
        "Design system components",
        "Create reusable UI components",
        &["user-2"],
    ),
    (
        "card-3",
        "list-2",
        "Implement authentication",
        "Add user login and registration",
        &["user-1", "user-2"],
    ),
    (
        "card-4",
        "list-3",
        "Project planning",
        "Define project scope and timeline",
        &["user-1"],
    ),
    (
        "card-5",
        "list-4",
        "Social media strategy",
        "Plan social media content calendar",
        &["user-3"],
    ),
];

fn members(ids: &[&str]) -> IdSet<UserId> {
    ids.iter().map(|id| UserId::from(*id)).collect()
}

/// Insert the demonstration entities, wiring every parent sequence
pub(crate) fn load_demo_data(store: &mut BoardStore) {
    for seed in USERS {
        store.insert_user(
            User::new(seed.name, seed.email)
                .with_id(seed.id)
                .with_avatar(seed.avatar),
        );
    }

    for (id, name, description, member_ids) in WORKSPACES {
        let mut workspace = Workspace::new(*name).with_description(*description);
        workspace.id = (*id).into();
        workspace.members = members(member_ids);
        store.insert_workspace(workspace);
    }

    for (id, workspace_id, title, description, member_ids) in BOARDS {
        let mut board = Board::new(*title)
            .with_description(*description)
            .in_workspace(*workspace_id);
        board.id = (*id).into();
        board.members = members(member_ids);
        if let Some(workspace) = store.workspace_mut(&(*workspace_id).into()) {
            workspace.board_ids.append(board.id.clone());
        }
        store.insert_board(board);
    }

    for (id, board_id, title) in LISTS {
        let mut list = List::new(*title, *board_id);
        list.id = (*id).into();
        if let Some(board) = store.board_mut(&list.board_id) {
            board.list_ids.append(list.id.clone());
        }
        store.insert_list(list);
    }

    for (id, list_id, title, description, assignees) in CARDS {
        let mut card = Card::new(*title, *list_id).with_description(*description);
        card.id = (*id).into();
        card.assigned_users = members(assignees);
        if let Some(list) = store.list_mut(&card.list_id) {
            list.card_ids.append(card.id.clone());
        }
        store.insert_card(card);
    }

    debug!(
        users = USERS.len(),
        boards = BOARDS.len(),
        lists = LISTS.len(),
        cards = CARDS.len(),
        "loaded demo data"
    );
}
