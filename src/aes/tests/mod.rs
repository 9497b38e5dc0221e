mod test_aes_cbc;
