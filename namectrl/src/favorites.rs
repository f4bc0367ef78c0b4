use futures::future::join_all;
use namecore::{
    name::Name,
    platform::NameBackend,
    storage::Storage,
};
use nameprefs::PreferenceStore;
use std::{
    fmt,
    str::FromStr,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FavoriteSort {
    /// Most recently added first.
    #[default]
    Recent,
    /// Case-insensitive by display name.
    Alphabetical,
}

impl FromStr for FavoriteSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "recent" => Ok(FavoriteSort::Recent),
            "alphabetical" | "alpha" => Ok(FavoriteSort::Alphabetical),
            _ => Err(format!("unknown sort `{s}`; expected recent or alphabetical")),
        }
    }
}

impl fmt::Display for FavoriteSort {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            FavoriteSort::Recent => "recent",
            FavoriteSort::Alphabetical => "alphabetical",
        })
    }
}

/// Fetches the records for `ids` concurrently, in the order given.
///
/// Ids that fail to resolve (removed server side, transport failure) are
/// left out rather than failing the whole listing.
pub async fn resolve_favorites<B: NameBackend>(backend: &B, ids: &[i64]) -> Vec<Name> {
    join_all(ids.iter().map(|id| backend.get_name(*id)))
        .await
        .into_iter()
        .zip(ids)
        .filter_map(|(result, id)| match result {
            Ok(name) => Some(name),
            Err(e) => {
                log::debug!("favorite {id} could not be resolved: {e}");
                None
            }
        })
        .collect()
}

/// Orders resolved favorites; `ids` is the stored insertion order.
pub fn sort_favorites(names: &mut [Name], ids: &[i64], sort: FavoriteSort) {
    match sort {
        FavoriteSort::Alphabetical => names.sort_by(|a, b| {
            a.name.to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name))
        }),
        FavoriteSort::Recent => {
            let position = |name: &Name| ids.iter().position(|id| *id == name.id);
            names.sort_by_key(|name| std::cmp::Reverse(position(name)));
        }
    }
}

/// The favorites screen: stored ids resolved against the backend and
/// sorted.
pub async fn load_favorites<B, S>(
    backend: &B,
    prefs: &PreferenceStore<S>,
    sort: FavoriteSort,
) -> Vec<Name>
where
    B: NameBackend,
    S: Storage,
{
    let ids = prefs.list_favorites();
    if ids.is_empty() {
        return Vec::new();
    }
    let mut names = resolve_favorites(backend, &ids).await;
    sort_favorites(&mut names, &ids, sort);
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_names::fixture::name;

    #[test]
    fn test_sort_favorites() {
        let ids = [3, 1, 2];
        let mut names = vec![
            name(1, "zuzanna", None),
            name(2, "Adam", None),
            name(3, "Bartek", None),
        ];
        sort_favorites(&mut names, &ids, FavoriteSort::Recent);
        assert_eq!(names.iter().map(|n| n.id).collect::<Vec<_>>(), vec![2, 1, 3]);
        sort_favorites(&mut names, &ids, FavoriteSort::Alphabetical);
        assert_eq!(names.iter().map(|n| n.id).collect::<Vec<_>>(), vec![2, 3, 1]);
    }

    #[test]
    fn test_parse_sort() {
        assert_eq!("recent".parse::<FavoriteSort>(), Ok(FavoriteSort::Recent));
        assert_eq!("Alphabetical".parse::<FavoriteSort>(), Ok(FavoriteSort::Alphabetical));
        assert!("newest".parse::<FavoriteSort>().is_err());
        assert_eq!(FavoriteSort::default().to_string(), "recent");
    }
}
