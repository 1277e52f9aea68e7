//! Shared GraphQL fragments.
//!
//! Each macro expands to a string literal so documents can splice
//! fragments in with `concat!`.

macro_rules! media_ref_fields {
    () => {
        "id\n    url\n"
    };
}

macro_rules! actor_fragment {
    () => {
        concat!(
            "fragment ActorFragment on Actor {\n",
            "  id\n",
            "  avatar {\n    ",
            media_ref_fields!(),
            "  }\n",
            "  type\n",
            "  preferredUsername\n",
            "  name\n",
            "  domain\n",
            "  summary\n",
            "  url\n",
            "}\n"
        )
    };
}

macro_rules! tag_fragment {
    () => {
        "fragment TagFragment on Tag {\n  id\n  slug\n  title\n}\n"
    };
}

macro_rules! address_fragment {
    () => {
        concat!(
            "fragment AddressFragment on Address {\n",
            "  id\n",
            "  description\n",
            "  geom\n",
            "  street\n",
            "  locality\n",
            "  postalCode\n",
            "  region\n",
            "  country\n",
            "  type\n",
            "  url\n",
            "  originId\n",
            "  timezone\n",
            "  pictureInfo {\n",
            "    url\n",
            "    author { name url }\n",
            "    source { name url }\n",
            "  }\n",
            "}\n"
        )
    };
}

macro_rules! media_fragment {
    () => {
        concat!(
            "fragment MediaFragment on Media {\n",
            "  id\n",
            "  url\n",
            "  name\n",
            "  alt\n",
            "  metadata { width height blurhash }\n",
            "}\n"
        )
    };
}
