//! Local bookkeeping of installed, pending and recently used packs.
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard},
};

use alloy::primitives::U256;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    types::{PackStatus, Sticker, StickerPack},
    Result,
};

/// Number of recent stickers kept.
pub const MAX_RECENT_STICKERS: usize = 24;

/// Storage of the packs a user has installed or bought.
pub trait PackStore: Send + Sync {
    /// Installed packs by id.
    fn installed(&self) -> Result<BTreeMap<U256, StickerPack>>;

    /// Installs `pack`, replacing any previous version and dropping it from
    /// the pending packs.
    fn install(&self, pack: StickerPack) -> Result<()>;

    /// Removes an installed pack and its stickers from the recent list.
    fn uninstall(&self, pack_id: U256) -> Result<()>;

    /// Packs bought but not yet confirmed, by id.
    fn pending(&self) -> Result<BTreeMap<U256, StickerPack>>;

    /// Marks `pack` as pending.
    fn add_pending(&self, pack: StickerPack) -> Result<()>;

    /// Drops a pending pack.
    fn remove_pending(&self, pack_id: U256) -> Result<()>;

    /// Recently used stickers, most recent first.
    fn recent(&self) -> Result<Vec<Sticker>>;

    /// Moves `sticker` to the front of the recent list.
    fn add_recent(&self, sticker: Sticker) -> Result<()>;
}

/// Everything a store holds.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
struct Packs {
    #[serde(default)]
    installed: Vec<StickerPack>,
    #[serde(default)]
    pending: Vec<StickerPack>,
    #[serde(default)]
    recent: Vec<Sticker>,
}

impl Packs {
    fn upsert(packs: &mut Vec<StickerPack>, pack: StickerPack) {
        match packs.iter_mut().find(|p| p.id == pack.id) {
            Some(existing) => *existing = pack,
            None => packs.push(pack),
        }
    }

    fn by_id(packs: &[StickerPack]) -> BTreeMap<U256, StickerPack> {
        packs.iter().map(|p| (p.id, p.clone())).collect()
    }

    fn install(&mut self, mut pack: StickerPack) {
        pack.status = PackStatus::Installed;
        self.pending.retain(|p| p.id != pack.id);
        Self::upsert(&mut self.installed, pack);
    }

    fn uninstall(&mut self, pack_id: U256) {
        self.installed.retain(|p| p.id != pack_id);
        self.recent.retain(|s| s.pack_id != pack_id);
    }

    fn add_pending(&mut self, mut pack: StickerPack) {
        pack.status = PackStatus::Pending;
        Self::upsert(&mut self.pending, pack);
    }

    fn remove_pending(&mut self, pack_id: U256) {
        self.pending.retain(|p| p.id != pack_id);
    }

    fn add_recent(&mut self, sticker: Sticker) {
        self.recent.retain(|s| (s.pack_id, &s.hash) != (sticker.pack_id, &sticker.hash));
        self.recent.insert(0, sticker);
        self.recent.truncate(MAX_RECENT_STICKERS);
    }
}

fn lock(packs: &Mutex<Packs>) -> MutexGuard<'_, Packs> {
    packs.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// A store that lives as long as the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    packs: Mutex<Packs>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PackStore for MemoryStore {
    fn installed(&self) -> Result<BTreeMap<U256, StickerPack>> {
        Ok(Packs::by_id(&lock(&self.packs).installed))
    }

    fn install(&self, pack: StickerPack) -> Result<()> {
        lock(&self.packs).install(pack);
        Ok(())
    }

    fn uninstall(&self, pack_id: U256) -> Result<()> {
        lock(&self.packs).uninstall(pack_id);
        Ok(())
    }

    fn pending(&self) -> Result<BTreeMap<U256, StickerPack>> {
        Ok(Packs::by_id(&lock(&self.packs).pending))
    }

    fn add_pending(&self, pack: StickerPack) -> Result<()> {
        lock(&self.packs).add_pending(pack);
        Ok(())
    }

    fn remove_pending(&self, pack_id: U256) -> Result<()> {
        lock(&self.packs).remove_pending(pack_id);
        Ok(())
    }

    fn recent(&self) -> Result<Vec<Sticker>> {
        Ok(lock(&self.packs).recent.clone())
    }

    fn add_recent(&self, sticker: Sticker) -> Result<()> {
        lock(&self.packs).add_recent(sticker);
        Ok(())
    }
}

/// A store persisted as a JSON file, rewritten on every change.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    packs: Mutex<Packs>,
}

impl FileStore {
    /// Opens the store at `path`, starting empty if the file does not exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let packs = if path.exists() {
            serde_json::from_slice(&fs::read(&path)?)?
        } else {
            Packs::default()
        };
        debug!(path = %path.display(), "opened pack store");
        Ok(Self { path, packs: Mutex::new(packs) })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Applies `f` and persists the result. The in-memory state only
    /// changes once the file has been replaced.
    fn update(&self, f: impl FnOnce(&mut Packs)) -> Result<()> {
        let mut packs = lock(&self.packs);
        let mut next = packs.clone();
        f(&mut next);
        if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(&next)?)?;
        fs::rename(&tmp, &self.path)?;
        *packs = next;
        Ok(())
    }
}

impl PackStore for FileStore {
    fn installed(&self) -> Result<BTreeMap<U256, StickerPack>> {
        Ok(Packs::by_id(&lock(&self.packs).installed))
    }

    fn install(&self, pack: StickerPack) -> Result<()> {
        self.update(|packs| packs.install(pack))
    }

    fn uninstall(&self, pack_id: U256) -> Result<()> {
        self.update(|packs| packs.uninstall(pack_id))
    }

    fn pending(&self) -> Result<BTreeMap<U256, StickerPack>> {
        Ok(Packs::by_id(&lock(&self.packs).pending))
    }

    fn add_pending(&self, pack: StickerPack) -> Result<()> {
        self.update(|packs| packs.add_pending(pack))
    }

    fn remove_pending(&self, pack_id: U256) -> Result<()> {
        self.update(|packs| packs.remove_pending(pack_id))
    }

    fn recent(&self) -> Result<Vec<Sticker>> {
        Ok(lock(&self.packs).recent.clone())
    }

    fn add_recent(&self, sticker: Sticker) -> Result<()> {
        self.update(|packs| packs.add_recent(sticker))
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{uint, Address};

    use super::*;

    fn pack(id: u64) -> StickerPack {
        let mut pack = StickerPack::new(U256::from(id), Address::ZERO, U256::ZERO);
        pack.stickers = (0..2).map(|i| sticker(id, &format!("{id}-{i}"))).collect();
        pack
    }

    fn sticker(pack_id: u64, hash: &str) -> Sticker {
        Sticker { pack_id: U256::from(pack_id), url: String::new(), hash: hash.to_owned() }
    }

    #[test]
    fn install_moves_pack_out_of_pending() {
        let store = MemoryStore::new();
        store.add_pending(pack(1)).expect("should store");
        assert_eq!(
            store.pending().expect("should read")[&uint!(1_U256)].status,
            PackStatus::Pending
        );

        store.install(pack(1)).expect("should store");
        assert!(store.pending().expect("should read").is_empty());
        assert_eq!(
            store.installed().expect("should read")[&uint!(1_U256)].status,
            PackStatus::Installed
        );
    }

    #[test]
    fn recent_is_deduplicated_and_capped() {
        let store = MemoryStore::new();
        for i in 0..30 {
            store.add_recent(sticker(1, &format!("h{i}"))).expect("should store");
        }
        store.add_recent(sticker(1, "h10")).expect("should store");

        let recent = store.recent().expect("should read");
        assert_eq!(recent.len(), MAX_RECENT_STICKERS);
        assert_eq!(recent[0].hash, "h10");
        assert_eq!(recent[1].hash, "h29");
        assert_eq!(recent.iter().filter(|s| s.hash == "h10").count(), 1);
    }

    #[test]
    fn recent_keeps_same_hash_from_different_packs() {
        let store = MemoryStore::new();
        store.add_recent(sticker(1, "shared")).expect("should store");
        store.add_recent(sticker(2, "shared")).expect("should store");
        store.add_recent(sticker(1, "shared")).expect("should store");

        let recent = store.recent().expect("should read");
        assert_eq!(recent, vec![sticker(1, "shared"), sticker(2, "shared")]);
    }

    #[test]
    fn uninstall_drops_recent_stickers_of_pack() {
        let store = MemoryStore::new();
        store.install(pack(1)).expect("should store");
        store.install(pack(2)).expect("should store");
        store.add_recent(sticker(1, "1-0")).expect("should store");
        store.add_recent(sticker(2, "2-0")).expect("should store");

        store.uninstall(uint!(1_U256)).expect("should remove");
        let installed = store.installed().expect("should read");
        assert_eq!(installed.keys().copied().collect::<Vec<_>>(), vec![uint!(2_U256)]);
        let recent = store.recent().expect("should read");
        assert_eq!(recent, vec![sticker(2, "2-0")]);
    }

    #[test]
    fn file_store_persists_across_opens() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let path = dir.path().join("stickers").join("packs.json");

        {
            let store = FileStore::open(&path).expect("should open");
            store.install(pack(3)).expect("should store");
            store.add_pending(pack(4)).expect("should store");
            store.add_recent(sticker(3, "3-1")).expect("should store");
        }

        let store = FileStore::open(&path).expect("should reopen");
        assert_eq!(store.path(), path);
        assert!(store.installed().expect("should read").contains_key(&uint!(3_U256)));
        assert!(store.pending().expect("should read").contains_key(&uint!(4_U256)));
        assert_eq!(store.recent().expect("should read"), vec![sticker(3, "3-1")]);
    }

    #[test]
    fn failed_write_leaves_store_unchanged() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").expect("should write");
        let store = FileStore::open(blocker.join("packs.json")).expect("should open");

        assert!(matches!(store.install(pack(1)), Err(crate::Error::Store(_))));
        assert!(store.installed().expect("should read").is_empty());
        assert!(matches!(store.add_recent(sticker(1, "1-0")), Err(crate::Error::Store(_))));
        assert!(store.recent().expect("should read").is_empty());
    }

    #[test]
    fn file_store_rejects_corrupt_file() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let path = dir.path().join("packs.json");
        fs::write(&path, "not json").expect("should write");

        assert!(matches!(FileStore::open(&path), Err(crate::Error::StoreEncoding(_))));
    }
}
