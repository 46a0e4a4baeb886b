//! Generated implementor data for `core::default::Default`.

use crate::StaticFragment;

/// Implementors of `core::default::Default` across the documented packages.
pub const CORE_DEFAULT: StaticFragment = StaticFragment::new(
    "core::default::Default",
    &[
        ("libc", &[]),
        (
            "rand",
            &[
                "impl <a class='trait' href='https://doc.rust-lang.org/nightly/core/default/trait.Default.html' title='core::default::Default'>Default</a> for <a class='struct' href='rand/reseeding/struct.ReseedWithDefault.html' title='rand::reseeding::ReseedWithDefault'>ReseedWithDefault</a>",
            ],
        ),
        (
            "uuid",
            &[
                "impl <a class='trait' href='https://doc.rust-lang.org/nightly/core/default/trait.Default.html' title='core::default::Default'>Default</a> for <a class='struct' href='uuid/struct.Uuid.html' title='uuid::Uuid'>Uuid</a>",
            ],
        ),
        (
            "feed",
            &[
                "impl <a class='trait' href='https://doc.rust-lang.org/nightly/core/default/trait.Default.html' title='core::default::Default'>Default</a> for <a class='struct' href='feed/feedio/struct.FeedWriter.html' title='feed::feedio::FeedWriter'>FeedWriter</a>",
                "impl <a class='trait' href='https://doc.rust-lang.org/nightly/core/default/trait.Default.html' title='core::default::Default'>Default</a> for <a class='struct' href='feed/rss/struct.CategoryBuilder.html' title='feed::rss::CategoryBuilder'>CategoryBuilder</a>",
                "impl <a class='trait' href='https://doc.rust-lang.org/nightly/core/default/trait.Default.html' title='core::default::Default'>Default</a> for <a class='struct' href='feed/rss/struct.Channel.html' title='feed::rss::Channel'>Channel</a>",
                "impl <a class='trait' href='https://doc.rust-lang.org/nightly/core/default/trait.Default.html' title='core::default::Default'>Default</a> for <a class='struct' href='feed/rss/struct.ChannelBuilder.html' title='feed::rss::ChannelBuilder'>ChannelBuilder</a>",
                "impl <a class='trait' href='https://doc.rust-lang.org/nightly/core/default/trait.Default.html' title='core::default::Default'>Default</a> for <a class='struct' href='feed/rss/struct.CloudBuilder.html' title='feed::rss::CloudBuilder'>CloudBuilder</a>",
                "impl <a class='trait' href='https://doc.rust-lang.org/nightly/core/default/trait.Default.html' title='core::default::Default'>Default</a> for <a class='struct' href='feed/rss/struct.EnclosureBuilder.html' title='feed::rss::EnclosureBuilder'>EnclosureBuilder</a>",
                "impl <a class='trait' href='https://doc.rust-lang.org/nightly/core/default/trait.Default.html' title='core::default::Default'>Default</a> for <a class='struct' href='feed/rss/struct.GuidBuilder.html' title='feed::rss::GuidBuilder'>GuidBuilder</a>",
                "impl <a class='trait' href='https://doc.rust-lang.org/nightly/core/default/trait.Default.html' title='core::default::Default'>Default</a> for <a class='struct' href='feed/rss/struct.ImageBuilder.html' title='feed::rss::ImageBuilder'>ImageBuilder</a>",
                "impl <a class='trait' href='https://doc.rust-lang.org/nightly/core/default/trait.Default.html' title='core::default::Default'>Default</a> for <a class='struct' href='feed/rss/struct.ItemBuilder.html' title='feed::rss::ItemBuilder'>ItemBuilder</a>",
                "impl <a class='trait' href='https://doc.rust-lang.org/nightly/core/default/trait.Default.html' title='core::default::Default'>Default</a> for <a class='struct' href='feed/rss/struct.SourceBuilder.html' title='feed::rss::SourceBuilder'>SourceBuilder</a>",
                "impl <a class='trait' href='https://doc.rust-lang.org/nightly/core/default/trait.Default.html' title='core::default::Default'>Default</a> for <a class='struct' href='feed/rss/struct.TextInputBuilder.html' title='feed::rss::TextInputBuilder'>TextInputBuilder</a>",
                "impl <a class='trait' href='https://doc.rust-lang.org/nightly/core/default/trait.Default.html' title='core::default::Default'>Default</a> for <a class='struct' href='feed/struct.FeedBuilder.html' title='feed::FeedBuilder'>FeedBuilder</a>",
            ],
        ),
    ],
);
