//! Diesel table definitions. Keep in sync with `migrations/`.

diesel::table! {
    /// Arrival and leave events.
    punches (id) {
        id -> Uuid,
        /// Encoded ancestor key grouping the punch.
        ancestor -> Varchar,
        /// Email of the identity that recorded the punch.
        puncher -> Varchar,
        /// `arrival` or `leave`.
        kind -> Varchar,
        punched_at -> Timestamptz,
    }
}

diesel::table! {
    /// Directory users managed through the admin API.
    users (id) {
        id -> Uuid,
        ancestor -> Varchar,
        email -> Varchar,
        name -> Varchar,
        enabled -> Bool,
        created_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(punches, users);
