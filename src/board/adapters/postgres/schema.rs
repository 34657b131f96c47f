//! Diesel schema for board and task persistence.

diesel::table! {
    /// Board documents with embedded lists.
    boards (id) {
        /// Board identifier.
        id -> Uuid,
        /// Owning user.
        owner_id -> Uuid,
        /// Board title.
        #[max_length = 255]
        title -> Varchar,
        /// Member user identifiers as a JSONB array.
        members -> Jsonb,
        /// Ordered lists with their task references as JSONB.
        lists -> Jsonb,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Owning user.
        user_id -> Uuid,
        /// Task title.
        title -> Text,
        /// Task description.
        description -> Text,
        /// Title of the list holding the task.
        #[max_length = 20]
        status -> Varchar,
        /// Owning board reference, if any.
        board_id -> Nullable<Uuid>,
    }
}
