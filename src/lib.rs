pub mod filter {
    pub mod guard;
}

pub mod version;
