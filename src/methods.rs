//! Resource-operation catalog
//!
//! Every operation is one declarative entry: verb, URI template, the
//! success statuses, and the statuses the API documents as failures for
//! that endpoint. `resource_methods!` expands the table into the public
//! methods, all delegating to [`VimeoClient::execute`]; no operation
//! touches headers, serialization, or auth directly.

use crate::client::{Operation, QueryFilter, VimeoClient};
use crate::error::ClientError;
use crate::http::{HttpClient, HttpResponse, Method};
use crate::types::{NewAlbum, NewVideo};

/// Expands catalog entries into public operation methods.
///
/// Entry shapes:
/// - `name(params) => Verb "path", ok: [..], err: [..];`
/// - `name(params) [filter] => ...` adds an optional query filter argument
/// - `name(params) [body] => ...` adds a JSON body argument
///
/// Path parameters are interpolated into the URI template by name.
macro_rules! resource_methods {
    () => {};

    (
        $(#[$meta:meta])*
        $name:ident ($($param:ident),*) [filter] => $verb:ident $path:tt, ok: $ok:tt, err: $err:tt;
        $($rest:tt)*
    ) => {
        $(#[$meta])*
        pub async fn $name(
            &self,
            $($param: &str,)*
            filter: Option<&QueryFilter>,
        ) -> Result<HttpResponse, ClientError> {
            self.execute(Operation {
                method: Method::$verb,
                uri: format!($path),
                filter,
                body: None,
                success: &$ok,
                errors: &$err,
            })
            .await
        }

        resource_methods! { $($rest)* }
    };

    (
        $(#[$meta:meta])*
        $name:ident ($($param:ident),*) [body] => $verb:ident $path:tt, ok: $ok:tt, err: $err:tt;
        $($rest:tt)*
    ) => {
        $(#[$meta])*
        pub async fn $name(
            &self,
            $($param: &str,)*
            body: serde_json::Value,
        ) -> Result<HttpResponse, ClientError> {
            self.execute(Operation {
                method: Method::$verb,
                uri: format!($path),
                filter: None,
                body: Some(body),
                success: &$ok,
                errors: &$err,
            })
            .await
        }

        resource_methods! { $($rest)* }
    };

    (
        $(#[$meta:meta])*
        $name:ident ($($param:ident),*) => $verb:ident $path:tt, ok: $ok:tt, err: $err:tt;
        $($rest:tt)*
    ) => {
        $(#[$meta])*
        pub async fn $name(&self $(, $param: &str)*) -> Result<HttpResponse, ClientError> {
            self.execute(Operation {
                method: Method::$verb,
                uri: format!($path),
                filter: None,
                body: None,
                success: &$ok,
                errors: &$err,
            })
            .await
        }

        resource_methods! { $($rest)* }
    };
}

impl<H: HttpClient> VimeoClient<H> {
    resource_methods! {
        // users

        /// Get the authenticated user.
        read_user() => Get "/me", ok: [200], err: [];

        /// Edit the authenticated user.
        update_user() [body] => Patch "/me", ok: [200], err: [];

        // albums

        /// Get a list of the user's albums.
        read_albums() [filter] => Get "/me/albums", ok: [200], err: [400];

        /// Get info on an album.
        read_album(album_id) => Get "/me/albums/{album_id}", ok: [200], err: [404];

        /// Edit an album.
        update_album(album_id) [body] => Patch "/me/albums/{album_id}", ok: [200], err: [400, 403];

        /// Delete an album.
        delete_album(album_id) => Delete "/me/albums/{album_id}", ok: [204], err: [403, 404];

        /// Get the list of videos in an album.
        read_album_videos(album_id) [filter] => Get "/me/albums/{album_id}/videos", ok: [200], err: [404];

        /// Check if an album contains a video.
        read_video_from_album(album_id, video_id) => Get "/me/albums/{album_id}/videos/{video_id}", ok: [200], err: [404];

        /// Add a video to an album.
        add_video_to_album(album_id, video_id) => Put "/me/albums/{album_id}/videos/{video_id}", ok: [204], err: [403, 404];

        /// Remove a video from an album.
        remove_video_from_album(album_id, video_id) => Delete "/me/albums/{album_id}/videos/{video_id}", ok: [204], err: [403, 404];

        // appearances

        /// Get all videos the user appears in.
        read_appearance_videos() [filter] => Get "/me/appearances", ok: [200], err: [];

        // channels

        /// Get a list of the channels the user follows.
        read_channels() [filter] => Get "/me/channels", ok: [200], err: [304];

        /// Create a channel.
        create_channel() [body] => Post "/me/channels", ok: [200], err: [];

        /// Check if the user follows a channel.
        read_channel(channel_id) => Get "/me/channels/{channel_id}", ok: [204], err: [404];

        /// Subscribe to a channel.
        subscribe_channel(channel_id) => Put "/me/channels/{channel_id}", ok: [204], err: [];

        /// Unsubscribe from a channel.
        unsubscribe_channel(channel_id) => Delete "/me/channels/{channel_id}", ok: [204], err: [403];

        // categories

        /// Get a list of the categories the user follows.
        read_categories() [filter] => Get "/me/categories", ok: [200], err: [403];

        /// Check if the user follows a category.
        read_category(category_id) => Get "/me/categories/{category_id}", ok: [204], err: [];

        /// Subscribe to a category.
        subscribe_category(category_id) => Put "/me/categories/{category_id}", ok: [204], err: [];

        /// Unsubscribe from a category.
        unsubscribe_category(category_id) => Delete "/me/categories/{category_id}", ok: [204], err: [];

        // groups

        /// Get a list of the groups the user has joined.
        read_groups() [filter] => Get "/me/groups", ok: [200], err: [];

        /// Check if the user has joined a group.
        read_group(group_id) => Get "/me/groups/{group_id}", ok: [204], err: [404];

        /// Join a group.
        join_group(group_id) => Put "/me/groups/{group_id}", ok: [204], err: [403];

        /// Leave a group.
        leave_group(group_id) => Delete "/me/groups/{group_id}", ok: [204], err: [403];

        // feed

        /// Get a list of the videos in the user's feed.
        read_feed_videos() [filter] => Get "/me/feed", ok: [200], err: [];

        // followers

        /// Get a list of the user's followers.
        read_followers() [filter] => Get "/me/followers", ok: [200], err: [];

        // following

        /// Get a list of the users being followed.
        read_following_users() [filter] => Get "/me/following", ok: [200], err: [];

        /// Check if the user follows another user.
        read_follow_user(follow_user_id) => Get "/me/following/{follow_user_id}", ok: [204], err: [404];

        /// Follow a user.
        follow_user(follow_user_id) => Put "/me/following/{follow_user_id}", ok: [204], err: [404];

        /// Unfollow a user.
        unfollow_user(follow_user_id) => Delete "/me/following/{follow_user_id}", ok: [204], err: [];

        // likes

        /// Get a list of videos the user likes.
        read_liked_videos() [filter] => Get "/me/likes", ok: [200], err: [];

        /// Check if the user likes a video.
        read_liked_video(video_id) => Get "/me/likes/{video_id}", ok: [204], err: [404];

        /// Like a video.
        like_video(video_id) => Put "/me/likes/{video_id}", ok: [204], err: [400, 403];

        /// Unlike a video.
        unlike_video(video_id) => Delete "/me/likes/{video_id}", ok: [204], err: [400, 403];

        // pictures

        /// Get a list of the user's portrait images.
        read_pictures() => Get "/me/pictures", ok: [200], err: [];

        /// Create a new picture resource.
        create_pictures() [body] => Post "/me/pictures", ok: [201], err: [];

        /// Check if the user has a portrait.
        read_portrait(portraitset_id) => Get "/me/pictures/{portraitset_id}", ok: [200], err: [];

        /// Remove a portrait from the user's portrait list.
        remove_portrait(portraitset_id) => Delete "/me/pictures/{portraitset_id}", ok: [204], err: [];

        // portfolios

        /// Get a list of portfolios created by the user.
        read_portfolios() [filter] => Get "/me/portfolios", ok: [200], err: [];

        /// Get a portfolio.
        read_portfolio(portfolio_id) => Get "/me/portfolios/{portfolio_id}", ok: [200], err: [];

        /// Get the videos in a portfolio.
        read_portfolio_videos(portfolio_id) [filter] => Get "/me/portfolios/{portfolio_id}/videos", ok: [200], err: [];

        /// Check if a portfolio contains a video.
        read_video_from_portfolio(portfolio_id, video_id) => Get "/me/portfolios/{portfolio_id}/videos/{video_id}", ok: [204], err: [404];

        /// Add a video to a portfolio.
        add_video_to_portfolio(portfolio_id, video_id) => Put "/me/portfolios/{portfolio_id}/videos/{video_id}", ok: [204], err: [404];

        /// Remove a video from a portfolio.
        remove_video_from_portfolio(portfolio_id, video_id) => Delete "/me/portfolios/{portfolio_id}/videos/{video_id}", ok: [204], err: [404];

        // watch history

        /// View all videos the user has watched.
        get_watched_videos() => Get "/me/watched/videos", ok: [200], err: [];

        /// Clear the user's entire watch history.
        clear_all_watch_history() => Delete "/me/watched/videos", ok: [200], err: [];

        /// Remove a video from the user's watch history.
        remove_video_from_watch_history(video_id) => Delete "/me/watched/videos/{video_id}", ok: [204], err: [];

        // presets

        /// Get all presets created by the authenticated user.
        get_presets() [filter] => Get "/me/presets", ok: [200], err: [];

        /// Get a preset.
        get_preset(preset_id) => Get "/me/presets/{preset_id}", ok: [200], err: [];

        /// Edit a preset.
        update_preset(preset_id) [body] => Patch "/me/presets/{preset_id}", ok: [200], err: [400, 404];

        /// Get videos that have the given preset.
        get_preset_videos(preset_id) => Get "/me/presets/{preset_id}/videos", ok: [200], err: [];

        // videos

        /// Get a list of videos uploaded by the user.
        get_videos() [filter] => Get "/me/videos", ok: [200], err: [];

        /// Get a video.
        get_video(video_id) => Get "/me/videos/{video_id}", ok: [200], err: [404];

        // watch later

        /// Get the authenticated user's watch later queue.
        read_watchlaters() [filter] => Get "/me/watchlater", ok: [200], err: [];

        /// Check if a video is in the watch later queue.
        read_watchlater(video_id) => Get "/me/watchlater/{video_id}", ok: [204], err: [404];

        /// Add a video to the watch later queue.
        add_watchlater(video_id) => Put "/me/watchlater/{video_id}", ok: [204], err: [];

        /// Remove a video from the watch later queue.
        remove_watchlater(video_id) => Delete "/me/watchlater/{video_id}", ok: [204], err: [];

        // on demand

        /// Get the user's on demand pages.
        read_ondemand_pages() [filter] => Get "/me/ondemand/pages", ok: [200], err: [404];

        /// Create an on demand page.
        add_ondemand_pages() [body] => Post "/me/ondemand/pages", ok: [200], err: [];

        /// Get the user's on demand purchases and rentals.
        read_ondemand_purchases() [filter] => Get "/me/ondemand/purchases", ok: [200], err: [400, 403];

        /// Check if an on demand page is in the user's purchases.
        read_ondemand_purchase(ondemand_id) => Get "/me/ondemand/purchases/{ondemand_id}", ok: [200], err: [403, 404];
    }

    /// Create an album.
    ///
    /// Succeeds on 200 or 201; 400/401/403 are the documented failures.
    pub async fn create_album(&self, album: &NewAlbum) -> Result<HttpResponse, ClientError> {
        self.execute(Operation {
            method: Method::Post,
            uri: "/me/albums".to_string(),
            filter: None,
            body: Some(serde_json::to_value(album).expect("album payload serializes to JSON")),
            success: &[200, 201],
            errors: &[400, 401, 403],
        })
        .await
    }

    /// Begin the video upload process.
    ///
    /// `upload_url` must stay valid for at least 24 hours.
    pub async fn post_video(
        &self,
        redirect_url: &str,
        upload_url: &str,
    ) -> Result<HttpResponse, ClientError> {
        let video = NewVideo::post(redirect_url, upload_url);
        self.execute(Operation {
            method: Method::Post,
            uri: "/me/videos".to_string(),
            filter: None,
            body: Some(serde_json::to_value(&video).expect("video payload serializes to JSON")),
            success: &[201],
            errors: &[403],
        })
        .await
    }
}
