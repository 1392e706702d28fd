pub mod cat_behavioral;
