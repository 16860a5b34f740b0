pub const SCHEMA: &str = r#"
-- Account owners; every other table hangs off a user
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL              -- plain text, compared verbatim
);

-- Spending categories, named per user
CREATE TABLE IF NOT EXISTS categories (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,

    UNIQUE(user_id, name)
);

-- Individual expenses; category is free text naming a categories row
CREATE TABLE IF NOT EXISTS expenses (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date TEXT NOT NULL,                 -- ISO YYYY-MM-DD
    category TEXT NOT NULL,
    amount INTEGER NOT NULL,            -- cents
    user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE
);

-- Payments that come due on a rolling schedule
CREATE TABLE IF NOT EXISTS recurring_payments (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    amount INTEGER NOT NULL,            -- cents
    due_date TEXT NOT NULL,             -- ISO YYYY-MM-DD
    frequency TEXT NOT NULL,            -- Weekly | Monthly | Yearly
    user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE
);

-- One spending ceiling per user per calendar month
CREATE TABLE IF NOT EXISTS budgets (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    month TEXT NOT NULL,                -- YYYY-MM
    amount INTEGER NOT NULL,            -- cents
    user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,

    UNIQUE(user_id, month)
);
"#;
