//! GraphQL documents sent to the Storefront API.

/// Resolves a batch of variant ids in one request.
pub const VARIANT_NODES_QUERY: &str = r"
query VariantNodes($ids: [ID!]!) {
  nodes(ids: $ids) {
    ... on ProductVariant {
      id
      title
      priceV2 {
        amount
        currencyCode
      }
      image {
        url
        altText
      }
      product {
        title
      }
    }
  }
}
";

/// Reads the merchandise on every line of a cart.
pub const CART_LINES_QUERY: &str = r"
query CartLines($cartId: ID!) {
  cart(id: $cartId) {
    id
    lines(first: 250) {
      nodes {
        id
        quantity
        merchandise {
          ... on ProductVariant {
            id
          }
        }
      }
    }
  }
}
";

pub const CART_LINES_ADD_MUTATION: &str = r"
mutation CartLinesAdd($cartId: ID!, $lines: [CartLineInput!]!) {
  cartLinesAdd(cartId: $cartId, lines: $lines) {
    cart {
      id
    }
    userErrors {
      field
      message
    }
  }
}
";

pub const CART_CREATE_MUTATION: &str = r"
mutation CartCreate {
  cartCreate {
    cart {
      id
    }
    userErrors {
      field
      message
    }
  }
}
";
