use async_trait::async_trait;
use dashmap::DashMap;

use mergington::data::{Activity, Directory};
use mergington::errors::DirectoryError;

/// A trait for reading the activity directory and managing rosters.
///
/// Activities themselves are fixed for the lifetime of the service; only
/// their participant lists change. Implementations must keep each roster
/// free of duplicate emails even when calls for the same activity race.
///
/// # Examples
///
/// ```rust,ignore
/// async fn example_usage<S: ActivityService>(service: &S) -> Result<(), S::Error> {
///     let activity = service.sign_up("Chess Club", "ada@mergington.edu").await?;
///     assert!(activity.has_participant("ada@mergington.edu"));
///
///     service.unregister("Chess Club", "ada@mergington.edu").await?;
///
///     let directory = service.list().await?;
///     println!("{} activities", directory.len());
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait ActivityService {
    /// The error type returned by operations on this service.
    type Error;

    /// Returns a snapshot of every activity keyed by name.
    async fn list(&self) -> Result<Directory, Self::Error>;

    /// Retrieves a single activity by name.
    ///
    /// # Errors
    ///
    /// Returns an error if no activity has the given name.
    async fn get(&self, activity_name: &str) -> Result<Activity, Self::Error>;

    /// Appends `email` to the activity's participants.
    ///
    /// The email is not validated. Capacity is not enforced.
    ///
    /// # Errors
    ///
    /// Returns an error if the activity doesn't exist or the email is
    /// already on its roster.
    async fn sign_up(&self, activity_name: &str, email: &str) -> Result<Activity, Self::Error>;

    /// Removes `email` from the activity's participants.
    ///
    /// # Errors
    ///
    /// Returns an error if the activity doesn't exist or the email is not
    /// on its roster.
    async fn unregister(&self, activity_name: &str, email: &str)
    -> Result<Activity, Self::Error>;

    /// Number of activities in the directory.
    async fn count(&self) -> Result<usize, Self::Error>;
}

/// An in-memory implementation of the `ActivityService` trait.
///
/// Activities live in a `DashMap`. Sign up and unregister check and mutate a
/// roster while holding that entry's write guard, so concurrent requests for
/// one activity are serialized while other activities stay available.
#[derive(Default)]
pub struct ActivityServiceInMemory {
    activities: DashMap<String, Activity>,
}

impl ActivityServiceInMemory {
    /// Creates a service holding the given activities, keyed by their names.
    pub fn with_activities<I>(activities: I) -> Self
    where
        I: IntoIterator<Item = Activity>,
    {
        Self {
            activities: activities
                .into_iter()
                .map(|activity| (activity.name.clone(), activity))
                .collect(),
        }
    }
}

#[async_trait]
impl ActivityService for ActivityServiceInMemory {
    type Error = DirectoryError;

    async fn list(&self) -> Result<Directory, Self::Error> {
        Ok(self
            .activities
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect())
    }

    async fn get(&self, activity_name: &str) -> Result<Activity, Self::Error> {
        self.activities
            .get(activity_name)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| DirectoryError::NotFound(activity_name.to_string()))
    }

    async fn sign_up(&self, activity_name: &str, email: &str) -> Result<Activity, Self::Error> {
        let mut activity = self
            .activities
            .get_mut(activity_name)
            .ok_or_else(|| DirectoryError::NotFound(activity_name.to_string()))?;

        if !activity.add_participant(email.to_string()) {
            return Err(DirectoryError::AlreadySignedUp {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        }
        Ok(activity.value().clone())
    }

    async fn unregister(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<Activity, Self::Error> {
        let mut activity = self
            .activities
            .get_mut(activity_name)
            .ok_or_else(|| DirectoryError::NotFound(activity_name.to_string()))?;

        if !activity.remove_participant(email) {
            return Err(DirectoryError::NotSignedUp {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        }
        Ok(activity.value().clone())
    }

    async fn count(&self) -> Result<usize, Self::Error> {
        Ok(self.activities.len())
    }
}
